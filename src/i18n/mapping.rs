//! Per-locale value containers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value per locale code (e.g. `"en" → "create"`, `"de" → "erstellen"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMapping {
    values: BTreeMap<String, String>,
}

impl LanguageMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(locale, value);
        self
    }

    pub fn set(&mut self, locale: impl Into<String>, value: impl Into<String>) {
        self.values.insert(locale.into(), value.into());
    }

    pub fn get(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.values.contains_key(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<L, V> FromIterator<(L, V)> for LanguageMapping
where
    L: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (locale, value) in iter {
            mapping.set(locale, value);
        }
        mapping
    }
}

/// Either one value for every locale, or an explicit per-locale mapping.
///
/// Accepted wherever a segment or a title may be configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translatable {
    Uniform(String),
    Localized(LanguageMapping),
}

impl Translatable {
    /// The value for `locale`, if one applies.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            Translatable::Uniform(value) => Some(value),
            Translatable::Localized(mapping) => mapping.get(locale),
        }
    }

    /// Expand into a mapping over `locales`.
    pub fn to_mapping<'a>(&self, locales: impl IntoIterator<Item = &'a str>) -> LanguageMapping {
        match self {
            Translatable::Uniform(value) => {
                locales.into_iter().map(|l| (l, value.as_str())).collect()
            }
            Translatable::Localized(mapping) => mapping.clone(),
        }
    }
}

impl From<&str> for Translatable {
    fn from(value: &str) -> Self {
        Translatable::Uniform(value.to_string())
    }
}

impl From<String> for Translatable {
    fn from(value: String) -> Self {
        Translatable::Uniform(value)
    }
}

impl From<LanguageMapping> for Translatable {
    fn from(value: LanguageMapping) -> Self {
        Translatable::Localized(value)
    }
}
