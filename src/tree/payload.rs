//! Locale-aware key/value metadata attached to nodes and actions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::{interpolate, Translatable};

/// A single payload entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PayloadValue {
    /// Text that may vary per locale and may contain `{param}` placeholders.
    Text(Translatable),
    /// Arbitrary structured data.
    Data(serde_json::Value),
}

impl From<Translatable> for PayloadValue {
    fn from(value: Translatable) -> Self {
        PayloadValue::Text(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.into())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::Text(value.into())
    }
}

impl From<crate::i18n::LanguageMapping> for PayloadValue {
    fn from(value: crate::i18n::LanguageMapping) -> Self {
        PayloadValue::Text(value.into())
    }
}

impl From<serde_json::Value> for PayloadValue {
    fn from(value: serde_json::Value) -> Self {
        PayloadValue::Data(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    entries: BTreeMap<String, PayloadValue>,
}

impl Payload {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Text value of `key` for `locale` with placeholders substituted.
    /// String data entries count as text.
    pub fn text(
        &self,
        key: &str,
        locale: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Option<String> {
        let raw = match self.entries.get(key)? {
            PayloadValue::Text(text) => text.resolve(locale)?,
            PayloadValue::Data(serde_json::Value::String(s)) => s.as_str(),
            PayloadValue::Data(_) => return None,
        };
        Some(interpolate(raw, parameters))
    }

    /// Structured data stored under `key`.
    pub fn data(&self, key: &str) -> Option<&serde_json::Value> {
        match self.entries.get(key)? {
            PayloadValue::Data(value) => Some(value),
            PayloadValue::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageMapping;

    #[test]
    fn test_text_is_localized_and_interpolated() {
        let mut payload = Payload::default();
        payload.set(
            "title",
            LanguageMapping::new().with("en", "User {user}").with("de", "Benutzer {user}"),
        );
        let mut params = BTreeMap::new();
        params.insert("user".to_string(), "5".to_string());
        assert_eq!(payload.text("title", "de", &params).as_deref(), Some("Benutzer 5"));
        assert_eq!(payload.text("title", "fr", &params), None);
    }

    #[test]
    fn test_data_entries() {
        let mut payload = Payload::default();
        payload.set("meta", serde_json::json!({"robots": "noindex"}));
        payload.set("plain", serde_json::json!("hello"));
        assert_eq!(payload.data("meta").unwrap()["robots"], "noindex");
        assert_eq!(payload.text("meta", "en", &BTreeMap::new()), None);
        assert_eq!(payload.text("plain", "en", &BTreeMap::new()).as_deref(), Some("hello"));
    }
}
