//! Translation service contract and the in-crate implementations.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use dashmap::DashMap;

/// Query side of a translation catalog.
///
/// Lookups are synchronous; the tree calls them while building and compiling.
pub trait Translator: Send + Sync {
    /// The translation of `key` in `locale`, or `None` when the catalog has none.
    fn lookup(&self, key: &str, locale: &str) -> Option<String>;

    /// Plural-aware lookup. Entries are `singular|plural`; a count of one picks
    /// the first form, anything else the last.
    fn lookup_choice(&self, key: &str, count: u64, locale: &str) -> Option<String> {
        let raw = self.lookup(key, locale)?;
        let mut forms = raw.split('|');
        let first = forms.next().unwrap_or_default();
        let chosen = if count == 1 {
            first
        } else {
            forms.last().unwrap_or(first)
        };
        Some(chosen.trim().to_string())
    }

    /// `lookup` in `locale`, then in `fallback`.
    fn lookup_or_fallback(&self, key: &str, locale: &str, fallback: &str) -> Option<String> {
        self.lookup(key, locale)
            .or_else(|| self.lookup(key, fallback))
    }
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
    fn lookup(&self, key: &str, locale: &str) -> Option<String> {
        (**self).lookup(key, locale)
    }

    fn lookup_choice(&self, key: &str, count: u64, locale: &str) -> Option<String> {
        (**self).lookup_choice(key, count, locale)
    }
}

/// Replace `{name}` placeholders in `template` with values from `parameters`,
/// in one pass. Unknown placeholders are left untouched.
pub fn interpolate(template: &str, parameters: &BTreeMap<String, String>) -> String {
    if parameters.is_empty() || !template.contains('{') {
        return template.to_string();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        let end = start + 2 + len;
        match parameters.get(&rest[start + 1..end - 1]) {
            Some(value) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
            }
            None => out.push_str(&rest[..end]),
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

/// In-memory catalog: locale → flattened key → message.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    messages: HashMap<String, HashMap<String, String>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: &str, key: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(locale.to_string())
            .or_default()
            .insert(key.into(), message.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: &str, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(locale, key, message);
        self
    }

    /// Merge a TOML document for one locale. Nested tables are flattened with
    /// `.` separators, so `[resource] user = "User|Users"` becomes `resource.user`.
    pub fn load_toml(&mut self, locale: &str, source: &str) -> Result<usize, toml::de::Error> {
        let table: toml::Table = toml::from_str(source)?;
        let mut flat = Vec::new();
        flatten_table("", &table, &mut flat);
        let count = flat.len();
        for (key, message) in flat {
            self.insert(locale, key, message);
        }
        tracing::debug!(locale, keys = count, "Loaded translation catalog");
        Ok(count)
    }
}

fn flatten_table(prefix: &str, table: &toml::Table, out: &mut Vec<(String, String)>) {
    for (key, value) in table {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten_table(&full, inner, out),
            toml::Value::String(s) => out.push((full, s.clone())),
            other => out.push((full, other.to_string())),
        }
    }
}

impl Translator for MemoryCatalog {
    fn lookup(&self, key: &str, locale: &str) -> Option<String> {
        self.messages.get(locale)?.get(key).cloned()
    }
}

/// Memoises lookups of an inner translator, misses included.
pub struct CachedTranslator<T> {
    inner: T,
    entries: DashMap<(String, String), Option<String>>,
}

impl<T: Translator> CachedTranslator<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
        }
    }

    /// Number of memoised (locale, key) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<T: Translator> Translator for CachedTranslator<T> {
    fn lookup(&self, key: &str, locale: &str) -> Option<String> {
        let cache_key = (locale.to_string(), key.to_string());
        if let Some(hit) = self.entries.get(&cache_key) {
            return hit.value().clone();
        }
        let value = self.inner.lookup(key, locale);
        self.entries.insert(cache_key, value.clone());
        value
    }
}
