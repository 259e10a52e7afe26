//! Route Builder: permission tree to route tree.
//!
//! Each permission becomes exactly one route. The route key is the
//! absolute path obtained by walking `parent_id` links through a
//! [`PermissionIndex`] built from the whole input. Catalogues get an
//! index redirect to their first child and never appear as tabs.

use navkit_protocol::{
    BasicStatus, NavError, PermissionNode, PermissionType, RouteKind, RouteMeta, RouteNode,
};

use crate::flatten::{ensure_unique_keys, flatten};
use crate::index::PermissionIndex;

/// Build the route tree for `permissions`.
///
/// Fails when a `parent_id` does not resolve, when the parent chain loops,
/// or when two routes end up with the same key. No partial result is returned.
pub fn build_routes(permissions: &[PermissionNode]) -> Result<Vec<RouteNode>, NavError> {
    let index = PermissionIndex::new(permissions)?;
    let routes = transform(permissions, &index)?;

    let flat = flatten(&routes);
    ensure_unique_keys(&flat)?;

    tracing::info!(
        permissions = index.len(),
        routes = flat.len(),
        "Route tree built"
    );

    Ok(routes)
}

fn transform(
    permissions: &[PermissionNode],
    index: &PermissionIndex<'_>,
) -> Result<Vec<RouteNode>, NavError> {
    permissions
        .iter()
        .map(|permission| match permission.kind {
            PermissionType::Catalogue => catalogue_route(permission, index),
            PermissionType::Menu => menu_route(permission, index),
        })
        .collect()
}

fn catalogue_route(
    permission: &PermissionNode,
    index: &PermissionIndex<'_>,
) -> Result<RouteNode, NavError> {
    let mut meta = base_meta(permission, index)?;
    meta.hide_tab = true;

    let children = transform(&permission.children, index)?;
    let redirect = children.first().map(|child| child.meta.key.clone());

    tracing::debug!(
        key = %meta.key,
        children = children.len(),
        redirect = ?redirect,
        "Built catalogue route"
    );

    Ok(RouteNode {
        path: permission.route.clone(),
        order: permission.order,
        meta,
        kind: RouteKind::Catalogue { redirect },
        children,
    })
}

fn menu_route(
    permission: &PermissionNode,
    index: &PermissionIndex<'_>,
) -> Result<RouteNode, NavError> {
    let meta = base_meta(permission, index)?;

    tracing::debug!(key = %meta.key, component = ?permission.component, "Built menu route");

    Ok(RouteNode {
        path: permission.route.clone(),
        order: permission.order,
        meta,
        kind: RouteKind::Menu {
            component: permission.component.clone(),
        },
        // Menu permissions may still carry nested entries (e.g. detail pages).
        children: transform(&permission.children, index)?,
    })
}

fn base_meta(
    permission: &PermissionNode,
    index: &PermissionIndex<'_>,
) -> Result<RouteMeta, NavError> {
    let key = index.complete_route(permission)?;
    Ok(RouteMeta {
        key,
        label: permission.label.clone(),
        icon: permission.icon.clone(),
        hide_menu: permission.hidden,
        hide_tab: permission.hide_tab,
        disabled: permission.status == BasicStatus::Disabled,
        frame_src: permission.frame_src.clone(),
        new_feature: permission.new_feature,
    })
}
