//! Multi-tab keep-alive registry.
//!
//! Every visited route gets a tab that outlives navigation away from it.
//! Tabs are closed, reordered and refreshed explicitly; transitions that
//! change the active route drive an external router through the
//! [`Navigator`] trait.

pub mod error;
pub mod navigator;
pub mod registry;

pub use error::TabError;
pub use navigator::{NavigationEvent, Navigator, RecordingNavigator};
pub use registry::TabRegistry;
