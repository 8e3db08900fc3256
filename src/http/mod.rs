//! axum host router adapter.
//!
//! # Data Flow
//! ```text
//! CompiledTree::register_with(&mut AxumHost)
//!     → host.rs (handler table lookup, middleware by name, method merge per path)
//!     → matched.rs (MatchedRoute extension on every route)
//!     → AxumHost::into_router → axum::Router<S>
//!
//! Request
//!     → axum matches the compiled path
//!     → handler extracts Extension<MatchedRoute> + Path params
//!     → MatchedRoute::context → resolve::RequestContext
//! ```
//!
//! # Design Decisions
//! - Handlers are registered by key; the tree only stores references
//! - Controller keys are tried namespaced first (`app::controllers::PageController@show`)
//! - Redirects need no handler; they are answered natively
//! - Unknown handlers and middleware are logged and skipped, not fatal

pub mod host;
pub mod matched;

pub use host::AxumHost;
pub use matched::{MatchedRoute, ViewData};
