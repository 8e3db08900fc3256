//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Build / compile / cache / host registration produce:
//!     → tracing events (logging.rs installs the subscriber)
//!     → metrics counters (metrics.rs)
//!
//! Consumers:
//!     → stdout via the fmt layer
//!     → whatever metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder on its own
//! - `RUST_LOG` overrides the configured filter
//! - Counters only; compilation happens once, so no histograms

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
