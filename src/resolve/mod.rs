//! Request-time queries against a compiled tree.
//!
//! # Data Flow
//! ```text
//! Host matched a route
//!     → RequestContext (current node/action, locale, parameters)
//!     → Resolver::url / url_by_action (template + parameters → RouteUrl)
//!     → Resolver::lowest_rootline_action / is_active
//!     → Resolver::title / nav_title / breadcrumbs
//! ```
//!
//! # Design Decisions
//! - Request state lives in `RequestContext`, never on the nodes
//! - The resolver only reads the compiled tree; it is cheap to clone and `Send + Sync`
//! - Missing parameters fall back to the current request's parameters

pub mod active;
pub mod context;
pub mod resolver;
pub mod title;
pub mod url;

pub use context::RequestContext;
pub use resolver::Resolver;
pub use title::{Breadcrumb, TitleOptions};
pub use self::url::{RouteUrl, UrlOptions};
