//! Snapshot file handling.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::CacheConfig;
use crate::observability::metrics;
use crate::tree::CompiledTree;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("route tree cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("route tree cache at {path} could not be (de)serialized: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CacheError {
    fn io(path: &Path, source: io::Error) -> Self {
        CacheError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn serialize(path: &Path, source: serde_json::Error) -> Self {
        CacheError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Files deleted by [`RouteTreeCache::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub removed: Vec<PathBuf>,
}

/// Location of the compiled-tree snapshot and of the host router's cache.
#[derive(Debug, Clone)]
pub struct RouteTreeCache {
    tree_path: PathBuf,
    route_cache_path: PathBuf,
}

impl RouteTreeCache {
    pub fn new(tree_path: impl Into<PathBuf>, route_cache_path: impl Into<PathBuf>) -> Self {
        Self {
            tree_path: tree_path.into(),
            route_cache_path: route_cache_path.into(),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(&config.route_tree_cache_path, &config.route_cache_path)
    }

    pub fn cached_route_tree_path(&self) -> &Path {
        &self.tree_path
    }

    pub fn route_cache_path(&self) -> &Path {
        &self.route_cache_path
    }

    pub fn exists(&self) -> bool {
        self.tree_path.is_file()
    }

    /// Read the snapshot; `Ok(None)` when there is none.
    pub fn load(&self) -> Result<Option<CompiledTree>, CacheError> {
        let path = &self.tree_path;
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                metrics::record_cache_event("miss");
                return Ok(None);
            }
            Err(e) => return Err(CacheError::io(path, e)),
        };

        let tree: CompiledTree = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| CacheError::serialize(path, e))?;
        metrics::record_cache_event("hit");
        tracing::info!(path = %path.display(), nodes = tree.len(), "Route tree loaded from cache");
        Ok(Some(tree))
    }

    /// Write the snapshot, creating parent directories as needed.
    pub fn store(&self, tree: &CompiledTree) -> Result<(), CacheError> {
        let path = &self.tree_path;
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| CacheError::io(dir, e))?;
        }

        let file = File::create(path).map_err(|e| CacheError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, tree).map_err(|e| CacheError::serialize(path, e))?;
        writer.flush().map_err(|e| CacheError::io(path, e))?;

        metrics::record_cache_event("store");
        tracing::info!(path = %path.display(), routes = tree.routes().len(), "Route tree cached");
        Ok(())
    }

    /// Delete the host route cache and the snapshot.
    pub fn clear(&self) -> Result<ClearReport, CacheError> {
        let mut report = ClearReport::default();
        for path in [&self.route_cache_path, &self.tree_path] {
            match fs::remove_file(path) {
                Ok(()) => report.removed.push(path.clone()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(CacheError::io(path, e)),
            }
        }
        metrics::record_cache_event("clear");
        tracing::info!(removed = report.removed.len(), "Route tree cache cleared");
        Ok(report)
    }
}
