use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Dynamic route parameters, e.g. `{"id": "42"}` for `/user/:id`.
pub type RouteParams = BTreeMap<String, String>;

/// Identifier of a permission node as issued by the authorization service.
///
/// Accepts JSON strings and integers; integers are kept in decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PermissionId(String);

impl<'de> Deserialize<'de> for PermissionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Signed(id) => Self(id.to_string()),
            RawId::Unsigned(id) => Self(id.to_string()),
        })
    }
}

impl PermissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PermissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PermissionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Whether a permission groups children or is a navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionType {
    /// Groups children; redirects to its first child.
    Catalogue,
    /// A navigable page.
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BasicStatus {
    #[default]
    Enabled,
    Disabled,
}

/// A node of the permission tree supplied by the authorization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionNode {
    pub id: PermissionId,
    #[serde(default)]
    pub parent_id: Option<PermissionId>,
    /// Route segment relative to the parent, e.g. `workbench` or `user/:id`.
    pub route: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PermissionType,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
    #[serde(default, alias = "hide")]
    pub hidden: bool,
    #[serde(default)]
    pub hide_tab: bool,
    #[serde(default)]
    pub status: BasicStatus,
    /// Page component path, resolved by the rendering layer.
    #[serde(default)]
    pub component: Option<String>,
    /// External link or iframe source.
    #[serde(default)]
    pub frame_src: Option<String>,
    #[serde(default)]
    pub new_feature: bool,
    #[serde(default)]
    pub children: Vec<PermissionNode>,
}

impl PermissionNode {
    fn new(id: &str, route: &str, label: &str, kind: PermissionType) -> Self {
        Self {
            id: PermissionId::new(id),
            parent_id: None,
            route: route.to_string(),
            label: label.to_string(),
            kind,
            icon: None,
            order: None,
            hidden: false,
            hide_tab: false,
            status: BasicStatus::Enabled,
            component: None,
            frame_src: None,
            new_feature: false,
            children: Vec::new(),
        }
    }

    pub fn catalogue(id: &str, route: &str, label: &str) -> Self {
        Self::new(id, route, label, PermissionType::Catalogue)
    }

    pub fn menu(id: &str, route: &str, label: &str) -> Self {
        Self::new(id, route, label, PermissionType::Menu)
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent_id = Some(PermissionId::new(parent));
        self
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_children(mut self, children: Vec<PermissionNode>) -> Self {
        self.children = children;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Parse a permission list from the JSON returned by the authorization service.
    pub fn list_from_json(json: &str) -> Result<Vec<PermissionNode>, crate::NavError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Metadata attached to every route. Also the row type of the flat route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Absolute path; unique across the route table.
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub hide_menu: bool,
    #[serde(default)]
    pub hide_tab: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_src: Option<String>,
    #[serde(default)]
    pub new_feature: bool,
}

impl RouteMeta {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
            hide_menu: false,
            hide_tab: false,
            disabled: false,
            frame_src: None,
            new_feature: false,
        }
    }
}

/// One row of the flattened route table.
pub type FlatRouteEntry = RouteMeta;

/// What a route does when navigated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteKind {
    /// Group of routes. `redirect` is the index entry pointing at the first child.
    Catalogue {
        #[serde(default)]
        redirect: Option<String>,
    },
    /// Page route rendering `component`.
    Menu {
        #[serde(default)]
        component: Option<String>,
    },
}

/// A node of the route tree derived 1:1 from a permission node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Segment relative to the parent route.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    pub meta: RouteMeta,
    #[serde(flatten)]
    pub kind: RouteKind,
    #[serde(default)]
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn key(&self) -> &str {
        &self.meta.key
    }

    /// Target of the synthetic index redirect, for catalogues with children.
    pub fn index_redirect(&self) -> Option<&str> {
        match &self.kind {
            RouteKind::Catalogue { redirect } => redirect.as_deref(),
            RouteKind::Menu { .. } => None,
        }
    }

    pub fn is_catalogue(&self) -> bool {
        matches!(self.kind, RouteKind::Catalogue { .. })
    }
}

/// A displayable sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub new_feature: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

/// A previously visited route kept alive in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Route key with dynamic parameters substituted.
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub params: RouteParams,
    /// Milliseconds since the Unix epoch; changes on refresh.
    pub timestamp: i64,
    #[serde(default)]
    pub hide_tab: bool,
}
