//! Enabled locale set.

use crate::config::LocalizationConfig;

/// Supplies the ordered set of enabled locales and the default locale.
pub trait LocaleProvider: Send + Sync + std::fmt::Debug {
    fn locales(&self) -> Vec<String>;

    fn default_locale(&self) -> String;
}

/// Fixed locale set, usually taken from configuration.
#[derive(Debug, Clone)]
pub struct StaticLocales {
    locales: Vec<String>,
    default_locale: String,
}

impl StaticLocales {
    pub fn new(locales: Vec<String>, default_locale: impl Into<String>) -> Self {
        Self {
            locales,
            default_locale: default_locale.into(),
        }
    }

    pub fn from_config(config: &LocalizationConfig) -> Self {
        Self::new(config.locales.clone(), config.default_locale.clone())
    }
}

impl LocaleProvider for StaticLocales {
    fn locales(&self) -> Vec<String> {
        self.locales.clone()
    }

    fn default_locale(&self) -> String {
        self.default_locale.clone()
    }
}
