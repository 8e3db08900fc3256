//! Arena node model.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tree::action::RouteAction;
use crate::tree::locales::LocaleSubset;
use crate::tree::parameter::RouteParameter;
use crate::tree::payload::Payload;
use crate::tree::resource::RouteResource;
use crate::tree::segments::Segments;

/// Separator of controller namespaces. A leading separator roots a namespace.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Stable index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named middleware and the parameters it is called with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Middleware {
    pub name: String,
    pub parameters: Vec<String>,
}

/// One entry of the route hierarchy.
///
/// Nodes are only mutated through [`NodeBuilder`](crate::tree::NodeBuilder)
/// while the tree is being built; a compiled tree hands out shared references only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteNode {
    pub(crate) name: String,
    pub(crate) id: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) segments: Segments,
    pub(crate) locales: LocaleSubset,
    pub(crate) no_locale_prefix: bool,
    pub(crate) middleware: Vec<Middleware>,
    pub(crate) inherit_middleware: Vec<String>,
    pub(crate) skip_middleware: Vec<String>,
    pub(crate) namespace: String,
    pub(crate) parameter: Option<RouteParameter>,
    pub(crate) actions: Vec<RouteAction>,
    pub(crate) resource: Option<RouteResource>,
    pub(crate) payload: Payload,
    pub(crate) content_lang_file: String,
    pub(crate) is_resource_child: bool,
    #[serde(default)]
    pub(crate) paths: BTreeMap<String, String>,
}

impl RouteNode {
    pub(crate) fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        parent: Option<NodeId>,
        locales: Vec<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            parent,
            children: Vec::new(),
            segments: Segments::default(),
            locales: LocaleSubset::new(locales),
            no_locale_prefix: false,
            middleware: Vec::new(),
            inherit_middleware: Vec::new(),
            skip_middleware: Vec::new(),
            namespace: namespace.into(),
            parameter: None,
            actions: Vec::new(),
            resource: None,
            payload: Payload::default(),
            content_lang_file: String::new(),
            is_resource_child: false,
            paths: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dot-joined names of the rootline (`about.company.team`).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Raw configured segment for `locale`; empty if none.
    pub fn segment(&self, locale: &str) -> &str {
        self.segments.get(locale)
    }

    pub fn inherits_segment(&self) -> bool {
        self.segments.inherit()
    }

    /// Locale subset before prefix collapsing.
    pub fn locale_subset(&self) -> &[String] {
        self.locales.as_slice()
    }

    pub fn no_locale_prefix(&self) -> bool {
        self.no_locale_prefix
    }

    /// Middleware of this node, optionally restricted to the inheritable ones.
    pub fn middleware(&self, inherit_only: bool) -> Vec<&Middleware> {
        self.middleware
            .iter()
            .filter(|m| !inherit_only || self.inherit_middleware.contains(&m.name))
            .collect()
    }

    pub fn skipped_middleware(&self) -> &[String] {
        &self.skip_middleware
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn parameter(&self) -> Option<&RouteParameter> {
        self.parameter.as_ref()
    }

    pub fn has_parameter(&self) -> bool {
        self.parameter.is_some()
    }

    pub fn actions(&self) -> &[RouteAction] {
        &self.actions
    }

    /// First action registered under `name`.
    pub fn action(&self, name: &str) -> Option<&RouteAction> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.action(name).is_some()
    }

    pub fn resource(&self) -> Option<&RouteResource> {
        self.resource.as_ref()
    }

    pub fn is_resource(&self) -> bool {
        self.resource.is_some()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Translation namespace of this node's content (`pages/about/team`).
    pub fn content_lang_file(&self) -> &str {
        &self.content_lang_file
    }

    pub fn is_resource_child(&self) -> bool {
        self.is_resource_child
    }

    /// Compiled path for `locale` (no leading slash). Empty before compilation.
    pub fn path(&self, locale: &str) -> Option<&str> {
        self.paths.get(locale).map(String::as_str)
    }

    pub fn paths(&self) -> &BTreeMap<String, String> {
        &self.paths
    }

    /// Registered in `locale`? Only meaningful after compilation.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.paths.contains_key(locale)
    }

    pub(crate) fn add_middleware(&mut self, name: &str, parameters: Vec<String>, inherit: bool) {
        match self.middleware.iter_mut().find(|m| m.name == name) {
            Some(existing) => existing.parameters = parameters,
            None => self.middleware.push(Middleware {
                name: name.to_string(),
                parameters,
            }),
        }
        if inherit && !self.inherit_middleware.iter().any(|m| m == name) {
            self.inherit_middleware.push(name.to_string());
        }
    }

    pub(crate) fn skip_middleware(&mut self, name: &str) {
        if !self.skip_middleware.iter().any(|m| m == name) {
            self.skip_middleware.push(name.to_string());
        }
        self.middleware.retain(|m| m.name != name);
    }

    /// A rooted value (leading `::`) replaces the inherited namespace,
    /// anything else is appended to it.
    pub(crate) fn set_namespace(&mut self, namespace: &str) {
        if let Some(rooted) = namespace.strip_prefix(NAMESPACE_SEPARATOR) {
            self.namespace = rooted.to_string();
        } else if self.namespace.is_empty() {
            self.namespace = namespace.to_string();
        } else {
            self.namespace = format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, namespace);
        }
    }

    pub(crate) fn remove_action(&mut self, name: &str) {
        self.actions.retain(|a| a.name != name);
    }
}
