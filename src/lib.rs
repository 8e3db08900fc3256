//! Localized hierarchical route trees.
//!
//! Build a tree of route nodes once at startup, compile it into per-locale
//! paths and HTTP bindings, hand those to a host router, and answer
//! request-time questions (URLs, active state, titles) against the frozen tree.
//!
//! ```text
//! config ──▶ tree::RouteTreeBuilder ──compile──▶ tree::CompiledTree ──▶ http::AxumHost
//!               ▲                                   │       │
//!          i18n::Translator                  cache (JSON)  resolve::Resolver
//!                                                           ▲
//!                                              per-request RequestContext
//! ```

pub mod cache;
pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod resolve;
pub mod tree;

pub use config::schema::RouteTreeConfig;
pub use lifecycle::{boot, TreeHandle};
pub use resolve::{RequestContext, Resolver};
pub use tree::{CompiledTree, NodeId, RouteTreeBuilder, TreeError, TreeResult};
