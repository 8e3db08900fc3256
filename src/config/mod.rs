//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteTreeConfig (validated, immutable)
//!     → TreeSettings / StaticLocales / RouteTreeCache / logging
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a rebuild of the tree
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::RouteTreeConfig;
pub use schema::{CacheConfig, LocalizationConfig, ObservabilityConfig, RoutingConfig, UrlConfig};
