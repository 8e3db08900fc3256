//! Frozen route tree, shared read-only between requests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tree::builder::TreeSettings;
use crate::tree::compile::{compile_path, rootline};
use crate::tree::error::{TreeError, TreeResult};
use crate::tree::node::{NodeId, RouteNode};
use crate::tree::parameter::RouteParameter;
use crate::tree::registration::{HostRouter, RouteRegistration};

/// Output of [`RouteTreeBuilder::compile`](crate::tree::RouteTreeBuilder::compile).
///
/// Exposes read queries only. Serializable, so it can be cached and re-hydrated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledTree {
    settings: TreeSettings,
    nodes: Vec<RouteNode>,
    index: HashMap<String, NodeId>,
    routes: Vec<RouteRegistration>,
}

impl CompiledTree {
    pub(crate) fn new(
        settings: TreeSettings,
        nodes: Vec<RouteNode>,
        index: HashMap<String, NodeId>,
        routes: Vec<RouteRegistration>,
    ) -> Self {
        Self {
            settings,
            nodes,
            index,
            routes,
        }
    }

    pub fn settings(&self) -> &TreeSettings {
        &self.settings
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node behind `id`.
    ///
    /// # Panics
    /// If `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&RouteNode> {
        self.nodes.get(id.0)
    }

    /// Resolve a dotted node id (`about.team`; `""` is the root).
    pub fn find(&self, id: &str) -> TreeResult<NodeId> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))
    }

    pub fn by_id(&self, id: &str) -> TreeResult<&RouteNode> {
        self.find(id).map(|id| self.node(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &RouteNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent)
            .children
            .iter()
            .copied()
            .find(|child| self.node(*child).name == name)
    }

    /// Compiled path of `id` in `locale`, no leading slash.
    pub fn path(&self, id: NodeId, locale: &str) -> Option<&str> {
        self.node(id).path(locale)
    }

    /// Re-derive the path of `id` from the frozen segments.
    pub fn compile_path(&self, id: NodeId, locale: &str) -> String {
        compile_path(&self.nodes, id, locale, &self.settings)
    }

    /// Locales `id` is registered in.
    pub fn locales(&self, id: NodeId) -> Vec<&str> {
        self.node(id).paths.keys().map(String::as_str).collect()
    }

    /// Ancestors root-first, optionally including `id`.
    pub fn rootline(&self, id: NodeId, include_current: bool) -> Vec<NodeId> {
        rootline(&self.nodes, id, include_current)
    }

    /// Parameters bound anywhere on the rootline of `id` (itself included).
    pub fn rootline_parameters(&self, id: NodeId) -> Vec<&RouteParameter> {
        self.rootline(id, true)
            .into_iter()
            .filter_map(|n| self.node(n).parameter())
            .collect()
    }

    /// All host registrations, in registration order.
    pub fn routes(&self) -> &[RouteRegistration] {
        &self.routes
    }

    /// Hand every registration to `host`; returns how many were registered.
    pub fn register_with<H: HostRouter + ?Sized>(&self, host: &mut H) -> usize {
        for route in &self.routes {
            tracing::debug!(
                method = %route.method,
                path = %route.path,
                name = %route.name,
                "Registering route"
            );
            host.register(route);
        }
        crate::observability::metrics::record_registered(self.routes.len());
        self.routes.len()
    }
}
