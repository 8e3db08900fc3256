//! Mutable build phase of the route tree.
//!
//! # Responsibilities
//! - Own the node arena while the tree is being declared
//! - Create children strictly parent-before-child
//! - Copy inherited attributes (id prefix, namespace, locale prefix, middleware)
//!   from the parent at construction time
//!
//! # Design Decisions
//! - Inheritance is a one-time copy, not a live link
//! - Child setup callbacks run synchronously inside `child`
//! - `compile` consumes the builder, so a compiled tree can't be mutated

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RouteTreeConfig;
use crate::i18n::{LocaleProvider, StaticLocales, Translatable, Translator};
use crate::tree::action::{Handler, Method, RouteAction};
use crate::tree::error::{TreeError, TreeResult};
use crate::tree::node::{NodeId, RouteNode};
use crate::tree::parameter::RouteParameter;
use crate::tree::payload::PayloadValue;
use crate::tree::resource::{ResourceBuilder, RouteResource};

/// Global inputs of a tree, fixed for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSettings {
    /// Enabled locales, in order.
    pub locales: Vec<String>,
    pub default_locale: String,
    pub fallback_locale: String,
    /// Disable the locale path prefix for the whole tree.
    pub no_locale_prefix: bool,
    /// Prefix of every node's content-translation namespace.
    pub base_folder: String,
    /// Controller namespace of the root node.
    pub default_namespace: String,
}

impl TreeSettings {
    pub fn new(locales: &dyn LocaleProvider, config: &RouteTreeConfig) -> Self {
        Self {
            locales: locales.locales(),
            default_locale: locales.default_locale(),
            fallback_locale: config.localization.fallback_locale.clone(),
            no_locale_prefix: config.routing.no_locale_prefix,
            base_folder: config.localization.base_folder.clone(),
            default_namespace: config.routing.default_namespace.clone(),
        }
    }

    pub fn from_config(config: &RouteTreeConfig) -> Self {
        Self::new(&StaticLocales::from_config(&config.localization), config)
    }

    pub(crate) fn locale_iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    /// Locales `node` is registered in.
    pub(crate) fn node_locales(&self, node: &RouteNode) -> Vec<String> {
        node.locales
            .resolve(self.no_locale_prefix || node.no_locale_prefix, &self.default_locale)
    }
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self::from_config(&RouteTreeConfig::default())
    }
}

/// Builds a route tree node by node; see [`NodeBuilder`].
pub struct RouteTreeBuilder {
    pub(crate) settings: TreeSettings,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) nodes: Vec<RouteNode>,
    pub(crate) index: HashMap<String, NodeId>,
}

impl RouteTreeBuilder {
    /// Start a tree with an unnamed root node.
    pub fn new(settings: TreeSettings, translator: Arc<dyn Translator>) -> Self {
        let mut root = RouteNode::new(
            "",
            "",
            None,
            settings.locales.clone(),
            settings.default_namespace.clone(),
        );
        root.content_lang_file = settings.base_folder.clone();

        let mut index = HashMap::new();
        index.insert(String::new(), NodeId::ROOT);

        Self {
            settings,
            translator,
            nodes: vec![root],
            index,
        }
    }

    pub fn settings(&self) -> &TreeSettings {
        &self.settings
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    /// Builder for the root node.
    pub fn root(&mut self) -> NodeBuilder<'_> {
        NodeBuilder {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// Run `setup` against the root node.
    pub fn root_with<F>(&mut self, setup: F) -> TreeResult<()>
    where
        F: FnOnce(&mut NodeBuilder<'_>) -> TreeResult<()>,
    {
        setup(&mut self.root())
    }

    /// Builder for an already registered node, addressed by its dotted id.
    pub fn node(&mut self, id: &str) -> TreeResult<NodeBuilder<'_>> {
        let id = self.find(id)?;
        Ok(NodeBuilder { tree: self, id })
    }

    /// Create `name` below the node addressed by `parent_id`.
    pub fn child_of<F>(&mut self, parent_id: &str, name: &str, setup: F) -> TreeResult<NodeId>
    where
        F: FnOnce(&mut NodeBuilder<'_>) -> TreeResult<()>,
    {
        let parent = self.find(parent_id)?;
        self.create_child(parent, name, setup)
    }

    pub fn find(&self, id: &str) -> TreeResult<NodeId> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| TreeError::NodeNotFound(id.to_string()))
    }

    pub fn get(&self, id: NodeId) -> Option<&RouteNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn create_child<F>(&mut self, parent: NodeId, name: &str, setup: F) -> TreeResult<NodeId>
    where
        F: FnOnce(&mut NodeBuilder<'_>) -> TreeResult<()>,
    {
        let parent_node = &self.nodes[parent.0];
        if parent_node
            .children
            .iter()
            .any(|child| self.nodes[child.0].name == name)
        {
            return Err(TreeError::DuplicateChildName {
                parent: parent_node.id.clone(),
                name: name.to_string(),
            });
        }

        let id = if parent_node.id.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", parent_node.id, name)
        };
        let namespace = if parent_node.namespace.is_empty() {
            self.settings.default_namespace.clone()
        } else {
            parent_node.namespace.clone()
        };

        let mut node = RouteNode::new(
            name,
            id.clone(),
            Some(parent),
            self.settings.locales.clone(),
            namespace,
        );
        node.no_locale_prefix = parent_node.no_locale_prefix;
        node.content_lang_file = format!("{}/{}", self.settings.base_folder, id.replace('.', "/"));
        for middleware in parent_node.middleware(true) {
            if !node.skip_middleware.contains(&middleware.name) {
                node.add_middleware(&middleware.name, middleware.parameters.clone(), true);
            }
        }

        let child = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(child);
        self.index.insert(id, child);
        tracing::debug!(node = %self.nodes[child.0].id, "Route node created");

        setup(&mut NodeBuilder { tree: self, id: child })?;
        Ok(child)
    }
}

/// Mutable handle on one node of a [`RouteTreeBuilder`].
pub struct NodeBuilder<'a> {
    pub(crate) tree: &'a mut RouteTreeBuilder,
    pub(crate) id: NodeId,
}

impl<'a> NodeBuilder<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Read access to the node being built.
    pub fn node(&self) -> &RouteNode {
        &self.tree.nodes[self.id.0]
    }

    pub(crate) fn node_mut(&mut self) -> &mut RouteNode {
        &mut self.tree.nodes[self.id.0]
    }

    /// Set the path segment, either for every locale or per locale.
    pub fn segment(&mut self, segment: impl Into<Translatable>) -> &mut Self {
        let segment = segment.into();
        let RouteTreeBuilder { nodes, settings, .. } = &mut *self.tree;
        nodes[self.id.0].segments.set(&segment, settings.locale_iter());
        self
    }

    /// Whether this node's segment appears in its descendants' paths (default `true`).
    pub fn inherit_segment(&mut self, inherit: bool) -> &mut Self {
        self.node_mut().segments.set_inherit(inherit);
        self
    }

    /// Attach a middleware. Inheritable middleware is copied into children
    /// created afterwards.
    pub fn middleware(&mut self, name: &str, parameters: &[&str], inherit: bool) -> &mut Self {
        let parameters = parameters.iter().map(|p| p.to_string()).collect();
        self.node_mut().add_middleware(name, parameters, inherit);
        self
    }

    /// Drop an inherited middleware from this node.
    pub fn skip_middleware(&mut self, name: &str) -> &mut Self {
        self.node_mut().skip_middleware(name);
        self
    }

    /// Append to (or, with a leading `::`, replace) the controller namespace.
    pub fn namespace(&mut self, namespace: &str) -> &mut Self {
        self.node_mut().set_namespace(namespace);
        self
    }

    /// Disable the locale prefix for this node and every child created afterwards.
    pub fn no_locale_prefix(&mut self) -> &mut Self {
        self.node_mut().no_locale_prefix = true;
        self
    }

    pub fn only_locales(&mut self, locales: &[&str]) -> &mut Self {
        self.node_mut().locales.only(locales);
        self
    }

    pub fn except_locales(&mut self, locales: &[&str]) -> &mut Self {
        self.node_mut().locales.except(locales);
        self
    }

    /// Bind a route parameter and use `{name}` as this node's segment.
    pub fn parameter(&mut self, name: &str) -> &mut RouteParameter {
        self.segment(format!("{{{name}}}"));
        self.bind_parameter(name)
    }

    pub(crate) fn bind_parameter(&mut self, name: &str) -> &mut RouteParameter {
        self.node_mut().parameter.insert(RouteParameter::new(name))
    }

    /// Set a payload entry.
    pub fn payload(&mut self, key: &str, value: impl Into<PayloadValue>) -> &mut Self {
        self.node_mut().payload.set(key, value);
        self
    }

    /// Shorthand for the `title` payload entry.
    pub fn title(&mut self, title: impl Into<Translatable>) -> &mut Self {
        self.payload("title", PayloadValue::Text(title.into()))
    }

    pub fn action(&mut self, method: Method, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        let RouteTreeBuilder { nodes, settings, .. } = &mut *self.tree;
        let actions = &mut nodes[self.id.0].actions;
        actions.push(RouteAction::new(method, handler.into(), None));
        let index = actions.len() - 1;
        ActionBuilder {
            action: &mut actions[index],
            settings,
        }
    }

    pub fn get(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Get, handler)
    }

    pub fn post(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Post, handler)
    }

    pub fn put(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Put, handler)
    }

    pub fn patch(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Patch, handler)
    }

    pub fn delete(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Delete, handler)
    }

    pub fn options(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Options, handler)
    }

    pub fn any(&mut self, handler: impl Into<Handler>) -> ActionBuilder<'_> {
        self.action(Method::Any, handler)
    }

    /// GET action rendering `view` with static `data`.
    pub fn view(&mut self, view: &str, data: serde_json::Value) -> ActionBuilder<'_> {
        self.action(
            Method::Get,
            Handler::View {
                view: view.to_string(),
                data,
            },
        )
    }

    /// GET action redirecting to `destination` with `status`.
    pub fn redirect(&mut self, destination: &str, status: u16) -> ActionBuilder<'_> {
        self.action(
            Method::Get,
            Handler::Redirect {
                destination: destination.to_string(),
                status,
            },
        )
    }

    pub fn permanent_redirect(&mut self, destination: &str) -> ActionBuilder<'_> {
        self.redirect(destination, 301)
    }

    /// Remove every action registered under `name`.
    pub fn remove_action(&mut self, name: &str) -> &mut Self {
        self.node_mut().remove_action(name);
        self
    }

    /// Turn this node into a resource with the seven conventional actions.
    pub fn resource(&mut self, name: &str, controller: &str) -> ResourceBuilder<'_> {
        RouteResource::attach(self, name, controller)
    }

    /// Create a child node and run `setup` on it.
    pub fn child<F>(&mut self, name: &str, setup: F) -> TreeResult<NodeId>
    where
        F: FnOnce(&mut NodeBuilder<'_>) -> TreeResult<()>,
    {
        self.tree.create_child(self.id, name, setup)
    }
}

/// Mutable handle on one action of a node.
pub struct ActionBuilder<'a> {
    pub(crate) action: &'a mut RouteAction,
    pub(crate) settings: &'a TreeSettings,
}

impl<'a> ActionBuilder<'a> {
    /// Name the action (defaults to the method name).
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.action.name = name.to_string();
        self
    }

    /// Sub-segment appended to the node's path for this action.
    pub fn segment(&mut self, segment: impl Into<Translatable>) -> &mut Self {
        let mapping = segment.into().to_mapping(self.settings.locale_iter());
        self.action.segment = Some(mapping);
        self
    }

    pub fn payload(&mut self, key: &str, value: impl Into<PayloadValue>) -> &mut Self {
        self.action.payload.set(key, value);
        self
    }

    pub fn title(&mut self, title: impl Into<Translatable>) -> &mut Self {
        self.payload("title", PayloadValue::Text(title.into()))
    }
}
