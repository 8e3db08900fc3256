//! Route parameter bound to a node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::LanguageMapping;

/// A single route parameter (`{name}`) owned by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParameter {
    name: String,
    model: Option<String>,
    route_keys: LanguageMapping,
    values: BTreeMap<String, Vec<String>>,
}

impl RouteParameter {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            route_keys: LanguageMapping::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `{name}`, as it appears in path templates.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.name)
    }

    /// Model the host binds this parameter to.
    pub fn model(&mut self, model: impl Into<String>) -> &mut Self {
        self.model = Some(model.into());
        self
    }

    /// Per-locale attribute the host resolves the model by.
    pub fn route_keys(&mut self, keys: LanguageMapping) -> &mut Self {
        self.route_keys = keys;
        self
    }

    /// Valid values of this parameter in `locale`.
    pub fn values<I, V>(&mut self, locale: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values
            .insert(locale.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn route_key(&self, locale: &str) -> Option<&str> {
        self.route_keys.get(locale)
    }

    pub fn values_for(&self, locale: &str) -> Option<&[String]> {
        self.values.get(locale).map(Vec::as_slice)
    }
}
