use std::collections::HashMap;

use navkit_protocol::{FlatRouteEntry, MenuItem, NavError, PermissionNode, RouteNode, RouteParams};

use crate::breadcrumb::{breadcrumbs, BreadcrumbItem};
use crate::builder::build_routes;
use crate::flatten::{ensure_unique_keys, flatten};
use crate::menu::project_menu;
use crate::resolver::{resolve, MissingParamPolicy, Resolution};
use crate::search::search;

/// Route tree together with its menu and flat projections.
///
/// Constructed explicitly once the permissions are available and handed
/// to whoever needs it; all projections are computed up front.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteNode>,
    menu: Vec<MenuItem>,
    flat: Vec<FlatRouteEntry>,
    by_key: HashMap<String, usize>,
    policy: MissingParamPolicy,
}

impl RouteTable {
    /// Build from a permission tree.
    pub fn build(
        permissions: &[PermissionNode],
        policy: MissingParamPolicy,
    ) -> Result<Self, NavError> {
        Self::from_routes(build_routes(permissions)?, policy)
    }

    /// Wrap an already built (or statically declared) route tree.
    pub fn from_routes(routes: Vec<RouteNode>, policy: MissingParamPolicy) -> Result<Self, NavError> {
        let flat = flatten(&routes);
        ensure_unique_keys(&flat)?;

        let by_key = flat
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key.clone(), i))
            .collect();
        let menu = project_menu(&routes);

        Ok(Self { routes, menu, flat, by_key, policy })
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn flat(&self) -> &[FlatRouteEntry] {
        &self.flat
    }

    pub fn policy(&self) -> MissingParamPolicy {
        self.policy
    }

    pub fn get(&self, key: &str) -> Option<&FlatRouteEntry> {
        self.by_key.get(key).map(|&i| &self.flat[i])
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn resolve(&self, current_path: &str, params: &RouteParams) -> Resolution<'_> {
        resolve(current_path, params, &self.flat, self.policy)
    }

    pub fn search(&self, query: &str) -> Vec<&FlatRouteEntry> {
        search(&self.flat, query)
    }

    pub fn breadcrumbs(&self, matched_paths: &[&str]) -> Vec<BreadcrumbItem> {
        breadcrumbs(&self.routes, &self.flat, matched_paths)
    }
}
