//! Route Flattener: route tree to flat key-indexed table.

use std::collections::HashSet;

use navkit_protocol::{FlatRouteEntry, NavError, RouteNode};

/// Depth-first pre-order; one entry per route node.
pub fn flatten(routes: &[RouteNode]) -> Vec<FlatRouteEntry> {
    let mut entries = Vec::new();
    collect(routes, &mut entries);
    entries
}

fn collect(routes: &[RouteNode], entries: &mut Vec<FlatRouteEntry>) {
    for route in routes {
        entries.push(route.meta.clone());
        collect(&route.children, entries);
    }
}

/// Reject the table if two entries share a key.
pub fn ensure_unique_keys(entries: &[FlatRouteEntry]) -> Result<(), NavError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.key.as_str()) {
            return Err(NavError::DuplicateRouteKey(entry.key.clone()));
        }
    }
    Ok(())
}
