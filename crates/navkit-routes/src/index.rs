//! Id-indexed arena over the whole permission tree.
//!
//! Built once from the full input so that parent lookups never depend on
//! the partially transformed subtree.

use std::collections::HashMap;

use navkit_protocol::{NavError, PermissionId, PermissionNode, PATH_SEPARATOR};

pub struct PermissionIndex<'a> {
    nodes: HashMap<&'a PermissionId, &'a PermissionNode>,
}

impl<'a> PermissionIndex<'a> {
    /// Index every node of `permissions`, children included.
    pub fn new(permissions: &'a [PermissionNode]) -> Result<Self, NavError> {
        let mut nodes = HashMap::new();
        let mut stack: Vec<&'a PermissionNode> = permissions.iter().rev().collect();

        while let Some(node) = stack.pop() {
            if nodes.insert(&node.id, node).is_some() {
                return Err(NavError::DuplicatePermission(node.id.clone()));
            }
            stack.extend(node.children.iter().rev());
        }

        Ok(Self { nodes })
    }

    pub fn get(&self, id: &PermissionId) -> Option<&'a PermissionNode> {
        self.nodes.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Absolute path of `node`: its route segment prefixed by every ancestor's.
    pub fn complete_route(&self, node: &PermissionNode) -> Result<String, NavError> {
        let mut segments = vec![node.route.as_str()];
        let mut current = node;
        let mut steps = 0;

        while let Some(parent_id) = &current.parent_id {
            steps += 1;
            if steps > self.nodes.len() {
                return Err(NavError::ParentCycle(node.id.clone()));
            }
            let parent = self.get(parent_id).ok_or_else(|| NavError::UnresolvedParent {
                id: current.id.clone(),
                parent: parent_id.clone(),
            })?;
            segments.push(parent.route.as_str());
            current = parent;
        }

        segments.reverse();
        Ok(join_segments(&segments))
    }
}

/// Join segments under a leading `/`, collapsing repeated separators.
pub fn join_segments(segments: &[&str]) -> String {
    let joined = format!("{PATH_SEPARATOR}{}", segments.join("/"));
    let mut path = String::with_capacity(joined.len());
    for c in joined.chars() {
        if c == PATH_SEPARATOR && path.ends_with(PATH_SEPARATOR) {
            continue;
        }
        path.push(c);
    }
    path
}
