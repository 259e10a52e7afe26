/// Default landing path used when a navigation cannot be resolved.
pub const DEFAULT_HOME_PATH: &str = "/dashboard/workbench";

/// Separator between route segments.
pub const PATH_SEPARATOR: char = '/';

/// Prefix marking a dynamic route segment, e.g. `/user/:id`.
pub const PARAM_PREFIX: char = ':';
