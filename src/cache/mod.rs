//! Compiled-tree snapshot cache.
//!
//! # Data Flow
//! ```text
//! boot → RouteTreeCache::load  → Some(CompiledTree) → publish
//!                              → None → build + compile → RouteTreeCache::store
//! route-tree clear → RouteTreeCache::clear (host cache + snapshot)
//! ```
//!
//! # Design Decisions
//! - JSON snapshot of the whole compiled tree, registrations included
//! - Missing files are not errors when clearing
//! - The host router's own cache file is owned by the host; we only delete it

pub mod store;

pub use store::{CacheError, ClearReport, RouteTreeCache};
