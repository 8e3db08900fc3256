//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check locale references (default/fallback must be enabled)
//! - Validate the URL base
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTreeConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouteTreeConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no locales configured")]
    NoLocales,

    #[error("locale '{0}' is listed more than once")]
    DuplicateLocale(String),

    #[error("{field} '{locale}' is not an enabled locale")]
    UnknownLocale { field: &'static str, locale: String },

    #[error("base_url '{0}' is not an absolute URL")]
    InvalidBaseUrl(String),
}

pub fn validate_config(config: &RouteTreeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let l10n = &config.localization;

    if l10n.locales.is_empty() {
        errors.push(ValidationError::NoLocales);
    }

    let mut seen = HashSet::new();
    for locale in &l10n.locales {
        if !seen.insert(locale.as_str()) {
            errors.push(ValidationError::DuplicateLocale(locale.clone()));
        }
    }

    for (field, locale) in [
        ("default_locale", &l10n.default_locale),
        ("fallback_locale", &l10n.fallback_locale),
    ] {
        if !l10n.locales.is_empty() && !l10n.locales.contains(locale) {
            errors.push(ValidationError::UnknownLocale {
                field,
                locale: locale.clone(),
            });
        }
    }

    if let Some(base) = &config.urls.base_url {
        if url::Url::parse(base).is_err() {
            errors.push(ValidationError::InvalidBaseUrl(base.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouteTreeConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_fallback_locale() {
        let mut config = RouteTreeConfig::default();
        config.localization.fallback_locale = "de".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownLocale {
                field: "fallback_locale",
                locale: "de".into()
            }]
        );
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let mut config = RouteTreeConfig::default();
        config.urls.base_url = Some("/relative".into());
        assert!(validate_config(&config).is_err());
    }
}
