//! `navkit` - drive the route pipeline and tab registry from the command line.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use navkit_console::render::menu_tree_lines;
use navkit_console::{load_route_table, parse_param, parse_script, run_script, NavkitConfig};
use navkit_protocol::RouteParams;
use navkit_routes::{dynamic_param_names, Resolution};
use navkit_tabs::{RecordingNavigator, TabRegistry};

#[derive(Parser)]
#[command(name = "navkit", version, about = "Permission-driven routes, menus and tabs")]
struct Cli {
    /// Config file (default: <config dir>/navkit/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Route source JSON, overriding `router.source`.
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the route tree.
    Routes,
    /// Print the sidebar menu.
    Menu {
        /// Indented text instead of JSON.
        #[arg(long)]
        tree: bool,
    },
    /// Print the flat route table.
    Flat,
    /// Resolve a path against the route table.
    Resolve {
        path: String,
        /// Dynamic parameter, `name=value`.
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Search routes by label.
    Search { query: String },
    /// Breadcrumbs for the matched pathnames, outermost first.
    Breadcrumb { paths: Vec<String> },
    /// Replay a tab script (`-` reads stdin) and print the resulting tabs.
    Tabs { script: PathBuf },
}

#[derive(Serialize)]
struct TabsReport<'a> {
    active: &'a str,
    tabs: &'a [navkit_protocol::Tab],
    navigation: &'a [navkit_tabs::NavigationEvent],
    refused: Vec<String>,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_script(path: &Path) -> Result<String, anyhow::Error> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        std::io::stdin().read_to_string(&mut script).context("read script from stdin")?;
        Ok(script)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let mut config = NavkitConfig::load_or_default(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.router.source = source;
    }
    init_tracing(&config.logging.level);

    let table = load_route_table(&config.router)?;

    match cli.command {
        Command::Routes => print_json(table.routes())?,
        Command::Menu { tree: true } => {
            for line in menu_tree_lines(table.menu()) {
                println!("{line}");
            }
        }
        Command::Menu { tree: false } => print_json(table.menu())?,
        Command::Flat => print_json(table.flat())?,
        Command::Resolve { path, params } => {
            let params: RouteParams = params.into_iter().collect();
            match table.resolve(&path, &params) {
                Resolution::Matched(route) => {
                    let unfilled: Vec<&str> = dynamic_param_names(&route.entry.key)
                        .into_iter()
                        .filter(|name| route.params.get(*name).map_or(true, String::is_empty))
                        .collect();
                    print_json(&serde_json::json!({
                        "path": route.path,
                        "entry": route.entry,
                        "params": route.params,
                        "unfilled": unfilled,
                    }))?
                }
                Resolution::NotFound => {
                    tracing::warn!(path = %path, "No route matches");
                    print_json(&serde_json::json!({ "redirect": config.router.home_path }))?
                }
            }
        }
        Command::Search { query } => print_json(&table.search(&query))?,
        Command::Breadcrumb { paths } => {
            let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
            print_json(&table.breadcrumbs(&paths))?
        }
        Command::Tabs { script } => {
            let commands = parse_script(&read_script(&script)?)?;
            let mut registry = TabRegistry::new(RecordingNavigator::new(), &config.router.home_path)
                .with_policy(config.router.missing_params);
            let refused = run_script(&mut registry, &table, &commands);

            print_json(&TabsReport {
                active: registry.active_tab_route_path(),
                tabs: registry.tabs(),
                navigation: registry.navigator().events(),
                refused,
            })?
        }
    }

    Ok(())
}
