//! Per-request state.

use std::collections::BTreeMap;

use crate::tree::NodeId;

/// What the current request matched, in which locale, with which parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub locale: String,
    pub current: Option<(NodeId, String)>,
    pub parameters: BTreeMap<String, String>,
    /// Request path as seen by the host. Derived from `current` when unset.
    pub path: Option<String>,
}

impl RequestContext {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Mark `action` of `node` as the matched route.
    pub fn with_current(mut self, node: NodeId, action: impl Into<String>) -> Self {
        self.current = Some((node, action.into()));
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_parameters(mut self, parameters: BTreeMap<String, String>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn current_node(&self) -> Option<NodeId> {
        self.current.as_ref().map(|(node, _)| *node)
    }

    pub fn current_action(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, action)| action.as_str())
    }
}
