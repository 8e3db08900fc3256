//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the route tree.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteTreeConfig {
    /// Locales and translation settings.
    pub localization: LocalizationConfig,

    /// Path and namespace behaviour.
    pub routing: RoutingConfig,

    /// URL generation.
    pub urls: UrlConfig,

    /// Cache artifact locations.
    pub cache: CacheConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Enabled locales, in order.
    pub locales: Vec<String>,

    /// Locale used when prefixing is disabled.
    pub default_locale: String,

    /// Locale consulted when the active locale lacks a translation.
    pub fallback_locale: String,

    /// Base folder of content-translation files (e.g. "pages").
    pub base_folder: String,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string()],
            default_locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            base_folder: "pages".to_string(),
        }
    }
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Disable the leading locale segment for every path.
    pub no_locale_prefix: bool,

    /// Controller namespace of the root node.
    pub default_namespace: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            no_locale_prefix: false,
            default_namespace: "app::controllers".to_string(),
        }
    }
}

/// URL generation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UrlConfig {
    /// Base for absolute URLs (e.g. "https://example.com").
    pub base_url: Option<String>,

    /// Generate absolute URLs unless the caller says otherwise.
    pub absolute: bool,
}

/// Cache artifact locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// The host router's native route cache.
    pub route_cache_path: String,

    /// Serialized compiled route tree.
    pub route_tree_cache_path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            route_cache_path: "cache/routes.json".to_string(),
            route_tree_cache_path: "cache/route-tree.json".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "route_tree=info".to_string(),
        }
    }
}
