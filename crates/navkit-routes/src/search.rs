use navkit_protocol::FlatRouteEntry;

/// Entries whose label contains `query`, case-insensitively, in table order.
///
/// Hidden-from-menu routes are searchable too; an empty query matches
/// everything. Whitespace in the query is matched literally.
pub fn search<'a>(flat: &'a [FlatRouteEntry], query: &str) -> Vec<&'a FlatRouteEntry> {
    let needle = query.to_lowercase();
    flat.iter()
        .filter(|entry| entry.label.to_lowercase().contains(&needle))
        .collect()
}
