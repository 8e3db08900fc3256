//! Startup orchestration.

use std::sync::Arc;

use thiserror::Error;

use crate::cache::{CacheError, RouteTreeCache};
use crate::config::RouteTreeConfig;
use crate::i18n::Translator;
use crate::observability::metrics;
use crate::tree::{CompiledTree, RouteTreeBuilder, TreeError, TreeResult, TreeSettings};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Build and compile a tree without touching the cache.
pub fn build<F>(
    config: &RouteTreeConfig,
    translator: Arc<dyn Translator>,
    define: F,
) -> TreeResult<CompiledTree>
where
    F: FnOnce(&mut RouteTreeBuilder) -> TreeResult<()>,
{
    let mut builder = RouteTreeBuilder::new(TreeSettings::from_config(config), translator);
    define(&mut builder)?;
    tracing::debug!(nodes = builder.len(), "Route tree defined");
    Ok(builder.compile())
}

/// Serve the cached snapshot when it matches the configuration, otherwise
/// build, compile and cache a fresh tree.
pub fn boot<F>(
    config: &RouteTreeConfig,
    translator: Arc<dyn Translator>,
    define: F,
) -> Result<CompiledTree, StartupError>
where
    F: FnOnce(&mut RouteTreeBuilder) -> TreeResult<()>,
{
    let cache = RouteTreeCache::from_config(&config.cache);
    match cache.load() {
        Ok(Some(tree)) if *tree.settings() == TreeSettings::from_config(config) => return Ok(tree),
        Ok(Some(_)) => {
            metrics::record_cache_event("stale");
            tracing::warn!(
                path = %cache.cached_route_tree_path().display(),
                "Cached route tree was compiled with different settings, rebuilding"
            );
        }
        Ok(None) => {}
        Err(CacheError::Serialize { path, source }) => {
            metrics::record_cache_event("corrupt");
            tracing::warn!(path = %path.display(), error = %source, "Cached route tree unreadable, rebuilding");
        }
        Err(e) => return Err(e.into()),
    }

    let tree = build(config, translator, define)?;
    cache.store(&tree)?;
    Ok(tree)
}
