//! navkit protocol - core navigation types
//!
//! Defines the permission tree handed over by the authorization service,
//! the route tree derived from it, the menu and flat-table projections,
//! and the tab records kept by the multi-tab registry.

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::*;
pub use types::*;
