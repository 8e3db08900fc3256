//! The locale subset a node is available in.

use serde::{Deserialize, Serialize};

/// Ordered locale subset, narrowed in place while building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSubset {
    locales: Vec<String>,
}

impl LocaleSubset {
    pub fn new(locales: Vec<String>) -> Self {
        Self { locales }
    }

    /// Keep only the locales listed in `only`.
    pub fn only<S: AsRef<str>>(&mut self, only: &[S]) {
        self.locales
            .retain(|locale| only.iter().any(|o| o.as_ref() == locale));
    }

    /// Drop every locale listed in `except`.
    pub fn except<S: AsRef<str>>(&mut self, except: &[S]) {
        self.locales
            .retain(|locale| !except.iter().any(|e| e.as_ref() == locale));
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }

    /// Locales the node is registered in. Collapses to the default locale
    /// when locale prefixing is disabled.
    pub fn resolve(&self, no_locale_prefix: bool, default_locale: &str) -> Vec<String> {
        if no_locale_prefix {
            return vec![default_locale.to_string()];
        }
        self.locales.clone()
    }
}
