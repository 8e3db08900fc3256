//! Route tree subsystem.
//!
//! # Data Flow
//! ```text
//! Build phase (startup, single thread):
//!     RouteTreeBuilder::new(settings, translator)
//!     → NodeBuilder::child / resource / get / post ...
//!     → attributes copied parent → child at construction
//!
//! Compile phase (once):
//!     RouteTreeBuilder::compile
//!     → auto segments (parent before children)
//!     → per-locale paths and action paths
//!     → RouteRegistration list (subtree before node)
//!     → CompiledTree (immutable)
//!
//! Runtime:
//!     CompiledTree shared via Arc
//!     → resolve::Resolver queries with a per-request context
//!     → HostRouter receives registrations
//! ```
//!
//! # Design Decisions
//! - Nodes live in an arena and reference each other by `NodeId`
//! - Segments and locale subsets are separate components held by each node
//! - Builder and compiled tree are different types; only the builder mutates

pub mod action;
pub mod builder;
pub mod compile;
pub mod compiled;
pub mod error;
pub mod locales;
pub mod node;
pub mod parameter;
pub mod payload;
pub mod registration;
pub mod resource;
pub mod segments;

pub use action::{Handler, Method, RouteAction};
pub use builder::{ActionBuilder, NodeBuilder, RouteTreeBuilder, TreeSettings};
pub use compiled::CompiledTree;
pub use error::{TreeError, TreeResult};
pub use node::{Middleware, NodeId, RouteNode};
pub use parameter::RouteParameter;
pub use payload::{Payload, PayloadValue};
pub use registration::{HostRouter, RouteRegistration};
pub use resource::{ResourceBuilder, RouteResource};
