//! `route-tree` command line.
//!
//! Maintenance tasks for applications that publish a compiled route tree:
//!
//! ```text
//! route-tree [--config route-tree.toml] clear
//!     → delete the host route cache and the compiled-tree snapshot
//!
//! route-tree [--config route-tree.toml] routes [--locale de]
//!     → list the routes of the cached snapshot
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use route_tree::cache::RouteTreeCache;
use route_tree::config::{load_config, RouteTreeConfig};
use route_tree::observability::init_logging;

#[derive(Parser)]
#[command(name = "route-tree")]
#[command(about = "Maintenance CLI for compiled route trees", long_about = None)]
struct Cli {
    /// Configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = "route-tree.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete the cached route tree and host routes
    Clear,
    /// List the routes of the cached route tree
    Routes {
        /// Only show routes of this locale
        #[arg(short, long)]
        locale: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = read_config(&cli.config)?;
    init_logging(&config.observability);

    let cache = RouteTreeCache::from_config(&config.cache);
    match cli.command {
        Commands::Clear => {
            let report = cache.clear()?;
            for path in &report.removed {
                tracing::debug!(path = %path.display(), "Removed");
            }
            println!("RouteTree cache cleared!");
        }
        Commands::Routes { locale } => {
            let Some(tree) = cache.load()? else {
                eprintln!(
                    "No cached route tree at {}",
                    cache.cached_route_tree_path().display()
                );
                return Ok(());
            };
            let routes = tree
                .routes()
                .iter()
                .filter(|route| locale.as_deref().map_or(true, |l| route.locale == l));
            for route in routes {
                println!(
                    "{:<8} {:<40} {:<40} {}",
                    route.method.as_str().to_uppercase(),
                    route.path,
                    route.name,
                    route.handler
                );
            }
        }
    }

    Ok(())
}

fn read_config(path: &Path) -> Result<RouteTreeConfig, Box<dyn std::error::Error>> {
    if path.exists() {
        Ok(load_config(path)?)
    } else {
        Ok(RouteTreeConfig::default())
    }
}
