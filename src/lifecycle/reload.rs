//! Published tree handle.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::cache::RouteTreeCache;
use crate::config::RouteTreeConfig;
use crate::i18n::Translator;
use crate::lifecycle::startup::{boot, StartupError};
use crate::tree::{CompiledTree, RouteTreeBuilder, TreeResult};

/// The currently published compiled tree.
///
/// Lock-free for readers; a replacement becomes visible to the next `load`.
pub struct TreeHandle {
    current: ArcSwap<CompiledTree>,
}

impl TreeHandle {
    pub fn new(tree: CompiledTree) -> Self {
        Self {
            current: ArcSwap::from_pointee(tree),
        }
    }

    pub fn load(&self) -> Arc<CompiledTree> {
        self.current.load_full()
    }

    /// Publish `tree`, returning the previous one.
    pub fn replace(&self, tree: CompiledTree) -> Arc<CompiledTree> {
        let previous = self.current.swap(Arc::new(tree));
        tracing::info!(nodes = self.current.load().len(), "Route tree replaced");
        previous
    }

    /// Clear the cache, rebuild from `define` and publish the result.
    pub fn rebuild<F>(
        &self,
        config: &RouteTreeConfig,
        translator: Arc<dyn Translator>,
        define: F,
    ) -> Result<Arc<CompiledTree>, StartupError>
    where
        F: FnOnce(&mut RouteTreeBuilder) -> TreeResult<()>,
    {
        RouteTreeCache::from_config(&config.cache).clear()?;
        let tree = boot(config, translator, define)?;
        Ok(self.replace(tree))
    }
}

impl std::fmt::Debug for TreeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeHandle")
            .field("nodes", &self.current.load().len())
            .finish()
    }
}
