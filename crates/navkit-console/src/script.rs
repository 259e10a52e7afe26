//! Tab scripts: one registry operation per line, replayed in order.
//!
//! ```text
//! # comments and blank lines are ignored
//! visit /dashboard/workbench
//! visit /management/user/42 id=42
//! close /dashboard/workbench
//! close-others
//! close-left /management/user/42
//! close-right /management/user/42
//! close-all
//! reorder 0 2
//! refresh
//! ```
//!
//! `close`, `close-others` and `refresh` default to the active tab.

use anyhow::{anyhow, bail};

use navkit_protocol::RouteParams;
use navkit_routes::RouteTable;
use navkit_tabs::{Navigator, TabRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabCommand {
    Visit { path: String, params: RouteParams },
    Close(Option<String>),
    CloseOthers(Option<String>),
    CloseLeft(String),
    CloseRight(String),
    CloseAll,
    Reorder { from: usize, to: usize },
    Refresh(Option<String>),
}

/// Parse `name=value`.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{raw}'")),
    }
}

fn parse_line(line: &str) -> Result<TabCommand, anyhow::Error> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let optional_key = || args.first().map(|key| key.to_string());
    let required_key = || {
        args.first()
            .map(|key| key.to_string())
            .ok_or_else(|| anyhow!("'{command}' needs a tab key"))
    };

    let parsed = match command {
        "visit" => {
            let (path, rest) = args
                .split_first()
                .ok_or_else(|| anyhow!("'visit' needs a path"))?;
            let params = rest
                .iter()
                .map(|raw| parse_param(raw).map_err(|e| anyhow!(e)))
                .collect::<Result<RouteParams, _>>()?;
            TabCommand::Visit { path: path.to_string(), params }
        }
        "close" => TabCommand::Close(optional_key()),
        "close-others" => TabCommand::CloseOthers(optional_key()),
        "close-left" => TabCommand::CloseLeft(required_key()?),
        "close-right" => TabCommand::CloseRight(required_key()?),
        "close-all" => TabCommand::CloseAll,
        "reorder" => match args.as_slice() {
            [from, to] => TabCommand::Reorder {
                from: from.parse()?,
                to: to.parse()?,
            },
            _ => bail!("'reorder' needs two indices"),
        },
        "refresh" => TabCommand::Refresh(optional_key()),
        other => bail!("unknown tab command '{other}'"),
    };
    Ok(parsed)
}

pub fn parse_script(script: &str) -> Result<Vec<TabCommand>, anyhow::Error> {
    script
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| parse_line(line).map_err(|e| e.context(format!("line {n}: {line}"))))
        .collect()
}

/// Apply `commands` to `registry`. Refused operations are logged and
/// returned; they do not stop the replay.
pub fn run_script<N: Navigator>(
    registry: &mut TabRegistry<N>,
    table: &RouteTable,
    commands: &[TabCommand],
) -> Vec<String> {
    let mut refusals = Vec::new();

    for command in commands {
        let active = registry.active_tab_route_path().to_string();
        let or_active = |key: &Option<String>| key.clone().unwrap_or_else(|| active.clone());

        let outcome = match command {
            TabCommand::Visit { path, params } => registry.visit(path, params, table).map(|_| ()),
            TabCommand::Close(key) => registry.close(&or_active(key)),
            TabCommand::CloseOthers(key) => registry.close_others(&or_active(key)),
            TabCommand::CloseLeft(key) => registry.close_left(key),
            TabCommand::CloseRight(key) => registry.close_right(key),
            TabCommand::CloseAll => registry.close_all(table),
            TabCommand::Reorder { from, to } => registry.reorder(*from, *to),
            TabCommand::Refresh(key) => registry.refresh(&or_active(key)),
        };

        if let Err(e) = outcome {
            tracing::warn!(command = ?command, error = %e, "Tab operation refused");
            refusals.push(format!("{command:?}: {e}"));
        }
    }

    refusals
}
