//! Library side of the `navkit` binary: configuration, route source
//! loading, tab scripts and text rendering.

pub mod config;
pub mod render;
pub mod script;
pub mod source;

pub use config::{LoggingConfig, NavkitConfig, RouteMode, RouterConfig};
pub use script::{parse_param, parse_script, run_script, TabCommand};
pub use source::{load_route_table, table_from_str};
