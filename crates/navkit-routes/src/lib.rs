//! Route pipeline: permission tree to route tree, and the projections
//! derived from it.
//!
//! - [`builder`]: permission tree to route tree with absolute keys
//! - [`menu`]: sidebar menu projection
//! - [`flatten`]: flat key-indexed route table
//! - [`resolver`]: current path to route entry, with `:name` parameters
//! - [`search`] and [`breadcrumb`]: lookups over the flat table
//! - [`table`]: [`RouteTable`], the explicitly constructed owner of all of the above

pub mod breadcrumb;
pub mod builder;
pub mod flatten;
pub mod index;
pub mod menu;
pub mod resolver;
pub mod search;
pub mod table;

pub use breadcrumb::{breadcrumbs, BreadcrumbItem, BreadcrumbLink};
pub use builder::build_routes;
pub use flatten::{ensure_unique_keys, flatten};
pub use index::PermissionIndex;
pub use menu::project_menu;
pub use resolver::{
    dynamic_param_names, replace_dynamic_params, resolve, MissingParamPolicy, Resolution, ResolvedRoute,
};
pub use search::search;
pub use table::RouteTable;
