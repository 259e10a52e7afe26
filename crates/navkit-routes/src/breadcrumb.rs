//! Breadcrumbs for the matched path hierarchy.
//!
//! The router reports one pathname per matched level (`/dashboard`,
//! `/dashboard/workbench`, ...). Each pathname that is a route key yields a
//! crumb. The walk descends the route tree itself, hidden levels included;
//! only a crumb's dropdown leaves out `hide_menu` children.

use serde::{Deserialize, Serialize};

use navkit_protocol::{FlatRouteEntry, RouteNode};

use crate::menu::order_rank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLink {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub key: String,
    pub label: String,
    /// Visible children of this level, empty for leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BreadcrumbLink>,
}

pub fn breadcrumbs(
    routes: &[RouteNode],
    flat: &[FlatRouteEntry],
    matched_paths: &[&str],
) -> Vec<BreadcrumbItem> {
    let paths: Vec<&str> = matched_paths.iter().copied().filter(|p| *p != "/").collect();
    let mut level = keyed_level(routes);

    flat.iter()
        .filter(|entry| paths.contains(&entry.key.as_str()))
        .map(|entry| {
            let next = level
                .iter()
                .copied()
                .find(|route| route.meta.key == entry.key)
                .map_or_else(Vec::new, |route| keyed_level(&route.children));
            level = next;

            BreadcrumbItem {
                key: entry.key.clone(),
                label: entry.label.clone(),
                children: level
                    .iter()
                    .filter(|route| !route.meta.hide_menu)
                    .map(|route| BreadcrumbLink {
                        key: route.meta.key.clone(),
                        label: route.meta.label.clone(),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Keyed routes of one level in menu order.
fn keyed_level(routes: &[RouteNode]) -> Vec<&RouteNode> {
    let mut level: Vec<&RouteNode> = routes.iter().filter(|route| !route.meta.key.is_empty()).collect();
    level.sort_by_key(|route| order_rank(route.order));
    level
}
