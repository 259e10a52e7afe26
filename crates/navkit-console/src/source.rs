use anyhow::Context;

use navkit_protocol::{PermissionNode, RouteNode};
use navkit_routes::{MissingParamPolicy, RouteTable};

use crate::config::{RouteMode, RouterConfig};

/// Build the route table from the configured source file.
pub fn load_route_table(router: &RouterConfig) -> Result<RouteTable, anyhow::Error> {
    let raw = std::fs::read_to_string(&router.source)
        .with_context(|| format!("read route source {}", router.source.display()))?;
    let table = table_from_str(router.mode, &raw, router.missing_params)
        .with_context(|| format!("build routes from {}", router.source.display()))?;

    tracing::info!(
        source = %router.source.display(),
        mode = ?router.mode,
        routes = table.len(),
        "Route table loaded"
    );
    Ok(table)
}

pub fn table_from_str(
    mode: RouteMode,
    raw: &str,
    policy: MissingParamPolicy,
) -> Result<RouteTable, anyhow::Error> {
    let table = match mode {
        RouteMode::Permission => {
            let permissions = PermissionNode::list_from_json(raw)?;
            RouteTable::build(&permissions, policy)?
        }
        RouteMode::Module => {
            let routes: Vec<RouteNode> =
                serde_json::from_str(raw).context("invalid route module JSON")?;
            RouteTable::from_routes(routes, policy)?
        }
    };
    Ok(table)
}
