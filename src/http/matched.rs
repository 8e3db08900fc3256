//! Per-route request extensions.

use std::collections::BTreeMap;

use crate::resolve::RequestContext;
use crate::tree::{CompiledTree, TreeResult};

/// Which compiled route served a request. Added to every route as an
/// `axum::Extension`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    /// Dotted node id.
    pub node: String,
    pub action: String,
    pub locale: String,
    /// Route name (`en.about.team.get`).
    pub name: String,
}

impl MatchedRoute {
    /// Request context for resolver queries, from the path parameters axum
    /// extracted.
    pub fn context(
        &self,
        tree: &CompiledTree,
        parameters: BTreeMap<String, String>,
    ) -> TreeResult<RequestContext> {
        let node = tree.find(&self.node)?;
        Ok(RequestContext::new(&self.locale)
            .with_current(node, &self.action)
            .with_parameters(parameters))
    }
}

/// Data attached to a view action. Available to view handlers as an
/// `axum::Extension`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewData(pub serde_json::Value);
