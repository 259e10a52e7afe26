//! Menu Projector: route tree to sidebar menu.

use navkit_protocol::{MenuItem, RouteNode};

/// Visible routes only, siblings sorted ascending by `order`.
///
/// Routes without a key or with `hide_menu` are dropped together with
/// their subtree. Routes without an order sort last; ties keep their
/// original relative order.
pub fn project_menu(routes: &[RouteNode]) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = routes
        .iter()
        .filter(|route| !route.meta.key.is_empty() && !route.meta.hide_menu)
        .map(|route| MenuItem {
            key: route.meta.key.clone(),
            label: route.meta.label.clone(),
            icon: route.meta.icon.clone(),
            disabled: route.meta.disabled,
            new_feature: route.meta.new_feature,
            order: route.order,
            children: project_menu(&route.children),
        })
        .collect();

    // sort_by_key is stable
    items.sort_by_key(|item| order_rank(item.order));
    items
}

pub(crate) fn order_rank(order: Option<u32>) -> u64 {
    order.map_or(u64::MAX, u64::from)
}
