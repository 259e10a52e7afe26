use std::collections::HashSet;

use navkit_protocol::{NavError, PermissionNode, RouteKind};
use navkit_routes::{build_routes, flatten};

fn admin_permissions() -> Vec<PermissionNode> {
    vec![
        PermissionNode::catalogue("dashboard", "dashboard", "Dashboard")
            .with_order(1)
            .with_children(vec![
                PermissionNode::menu("workbench", "workbench", "Workbench")
                    .with_parent("dashboard")
                    .with_order(1),
                PermissionNode::menu("analysis", "analysis", "Analysis")
                    .with_parent("dashboard")
                    .with_order(2),
            ]),
        PermissionNode::catalogue("management", "management", "Management")
            .with_order(2)
            .with_children(vec![
                PermissionNode::catalogue("system", "system", "System")
                    .with_parent("management")
                    .with_children(vec![
                        PermissionNode::menu("user", "user", "User").with_parent("system"),
                        PermissionNode::menu("user-detail", "user/:id", "User Detail")
                            .with_parent("system")
                            .hidden(),
                    ]),
            ]),
    ]
}

/// Generates a permission tree `depth` levels deep with `width` children per node.
fn generated_tree(depth: usize, width: usize) -> Vec<PermissionNode> {
    fn level(parent: Option<&str>, prefix: &str, depth: usize, width: usize) -> Vec<PermissionNode> {
        (0..width)
            .map(|i| {
                let id = format!("{prefix}{i}");
                let route = format!("seg{i}");
                let mut node = if depth > 1 {
                    PermissionNode::catalogue(&id, &route, &id)
                        .with_children(level(Some(&id), &format!("{id}."), depth - 1, width))
                } else {
                    PermissionNode::menu(&id, &route, &id)
                };
                if let Some(parent) = parent {
                    node = node.with_parent(parent);
                }
                node
            })
            .collect()
    }
    level(None, "n", depth, width)
}

// ─── Scenario A ──────────────────────────────────────────────────────────────

#[test]
fn test_catalogue_child_key_and_redirect() {
    let perms = vec![PermissionNode::catalogue("1", "dashboard", "Dashboard").with_children(vec![
        PermissionNode::menu("2", "workbench", "Workbench").with_parent("1"),
    ])];
    let routes = build_routes(&perms).unwrap();

    assert_eq!(routes[0].key(), "/dashboard");
    assert_eq!(routes[0].children[0].key(), "/dashboard/workbench");
    assert_eq!(routes[0].index_redirect(), Some("/dashboard/workbench"));
}

#[test]
fn test_redirect_targets_first_child_in_source_order() {
    let routes = build_routes(&admin_permissions()).unwrap();
    assert_eq!(routes[0].index_redirect(), Some("/dashboard/workbench"));
    // nested catalogue redirects to its own first child, not deeper
    assert_eq!(routes[1].index_redirect(), Some("/management/system"));
    assert_eq!(routes[1].children[0].index_redirect(), Some("/management/system/user"));
}

#[test]
fn test_catalogues_never_become_tabs() {
    let routes = build_routes(&admin_permissions()).unwrap();
    for entry in flatten(&routes) {
        let is_catalogue = ["/dashboard", "/management", "/management/system"].contains(&entry.key.as_str());
        assert_eq!(entry.hide_tab, is_catalogue, "hide_tab mismatch for {}", entry.key);
    }
}

#[test]
fn test_menu_route_carries_component_and_frame() {
    let mut perm = PermissionNode::menu("1", "external", "External");
    perm.component = Some("/sys/others/iframe/external-link".into());
    perm.frame_src = Some("https://ant.design".into());
    perm.new_feature = true;

    let routes = build_routes(&[perm]).unwrap();
    assert_eq!(
        routes[0].kind,
        RouteKind::Menu { component: Some("/sys/others/iframe/external-link".into()) }
    );
    assert_eq!(routes[0].meta.frame_src.as_deref(), Some("https://ant.design"));
    assert!(routes[0].meta.new_feature);
}

#[test]
fn test_dynamic_segment_kept_in_key() {
    let routes = build_routes(&admin_permissions()).unwrap();
    let detail = &routes[1].children[0].children[1];
    assert_eq!(detail.key(), "/management/system/user/:id");
    assert!(detail.meta.hide_menu);
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_unresolved_parent_in_nested_child_is_fatal() {
    let perms = vec![PermissionNode::catalogue("1", "dashboard", "Dashboard").with_children(vec![
        PermissionNode::menu("2", "workbench", "Workbench").with_parent("1"),
        PermissionNode::menu("3", "broken", "Broken").with_parent("missing"),
    ])];
    assert!(matches!(
        build_routes(&perms),
        Err(NavError::UnresolvedParent { .. })
    ));
}

#[test]
fn test_duplicate_route_key_rejected() {
    let perms = vec![
        PermissionNode::menu("1", "dashboard", "Dashboard"),
        PermissionNode::menu("2", "/dashboard/", "Dashboard again"),
    ];
    // "/dashboard/" does not collide with "/dashboard"
    assert!(build_routes(&perms).is_ok());

    let perms = vec![
        PermissionNode::menu("1", "dashboard", "Dashboard"),
        PermissionNode::menu("2", "//dashboard", "Dashboard again"),
    ];
    assert_eq!(
        build_routes(&perms).unwrap_err(),
        NavError::DuplicateRouteKey("/dashboard".into())
    );
}

// ─── Properties ──────────────────────────────────────────────────────────────

#[test]
fn test_flattened_keys_unique_for_consistent_trees() {
    for depth in 1..=4 {
        for width in 1..=4 {
            let perms = generated_tree(depth, width);
            let routes = build_routes(&perms).unwrap();
            let flat = flatten(&routes);

            let expected: usize = (1..=depth).map(|d| width.pow(d as u32)).sum();
            assert_eq!(flat.len(), expected, "one entry per node ({depth}x{width})");

            let keys: HashSet<&str> = flat.iter().map(|e| e.key.as_str()).collect();
            assert_eq!(keys.len(), flat.len(), "duplicate keys for {depth}x{width}");
        }
    }
}

#[test]
fn test_build_is_idempotent() {
    let perms = admin_permissions();
    let first = build_routes(&perms).unwrap();
    let second = build_routes(&perms).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_build_from_json() {
    let json = r#"[
        {"id": "1", "route": "dashboard", "label": "Dashboard", "type": "catalogue", "children": [
            {"id": "2", "parentId": "1", "route": "workbench", "label": "Workbench", "type": "menu",
             "component": "/dashboard/workbench/index.tsx"}
        ]}
    ]"#;
    let perms = PermissionNode::list_from_json(json).unwrap();
    let routes = build_routes(&perms).unwrap();
    let as_json = serde_json::to_value(&routes).unwrap();
    assert_eq!(as_json[0]["meta"]["key"], "/dashboard");
    assert_eq!(as_json[0]["children"][0]["component"], "/dashboard/workbench/index.tsx");
}

#[test]
fn test_build_from_json_with_numeric_ids() {
    let json = r#"[{"id": 1, "route": "dashboard", "label": "Dashboard", "type": "catalogue",
        "children": [{"id": 2, "parentId": 1, "route": "workbench", "label": "Workbench", "type": "menu"}]}]"#;
    let perms = PermissionNode::list_from_json(json).unwrap();
    let routes = build_routes(&perms).unwrap();

    assert_eq!(routes[0].children[0].key(), "/dashboard/workbench");
    assert_eq!(routes[0].index_redirect(), Some("/dashboard/workbench"));
}
