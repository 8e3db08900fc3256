//! Path segment storage and auto-segment resolution for a single node.

use serde::{Deserialize, Serialize};

use crate::i18n::{LanguageMapping, Translatable, Translator};

/// Per-locale path segments of a node plus the inherit-to-children flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    values: LanguageMapping,
    inherit: bool,
}

impl Default for Segments {
    fn default() -> Self {
        Self {
            values: LanguageMapping::new(),
            inherit: true,
        }
    }
}

impl Segments {
    /// Set segments. A uniform value applies to every locale in `locales`;
    /// a mapping only touches the locales it names.
    pub fn set<'a>(&mut self, value: &Translatable, locales: impl IntoIterator<Item = &'a str>) {
        for (locale, segment) in value.to_mapping(locales).iter() {
            self.values.set(locale, segment);
        }
    }

    /// The configured segment for `locale`; empty when none is set.
    pub fn get(&self, locale: &str) -> &str {
        self.values.get(locale).unwrap_or("")
    }

    pub fn is_set(&self, locale: &str) -> bool {
        self.values.contains(locale)
    }

    pub fn inherit(&self) -> bool {
        self.inherit
    }

    pub fn set_inherit(&mut self, inherit: bool) {
        self.inherit = inherit;
    }

    /// Fill every locale without an explicit segment: the translation of
    /// `key` in that locale if the catalog has one, else `name` verbatim.
    pub fn fill_auto<'a>(
        &mut self,
        name: &str,
        key: &str,
        locales: impl IntoIterator<Item = &'a str>,
        translator: &dyn Translator,
    ) {
        for locale in locales {
            if self.is_set(locale) {
                continue;
            }
            let segment = if name.is_empty() {
                String::new()
            } else {
                translator
                    .lookup(key, locale)
                    .unwrap_or_else(|| name.to_string())
            };
            self.values.set(locale, segment);
        }
    }
}
