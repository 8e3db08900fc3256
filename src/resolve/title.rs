//! Titles, navigation titles and breadcrumbs.

use std::collections::BTreeMap;

use crate::i18n::interpolate;
use crate::resolve::context::RequestContext;
use crate::resolve::resolver::Resolver;
use crate::resolve::url::{RouteUrl, UrlOptions};
use crate::tree::resource::capitalize;
use crate::tree::NodeId;

const TITLE_KEY: &str = "title";
const NAV_TITLE_KEY: &str = "nav_title";

/// Overrides for title resolution.
#[derive(Debug, Clone, Default)]
pub struct TitleOptions {
    /// Substituted into templated titles, on top of the request parameters.
    pub parameters: BTreeMap<String, String>,
    pub locale: Option<String>,
    /// Resolve for this action instead of the currently active one.
    pub for_action: Option<String>,
}

impl TitleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn for_action(mut self, action: impl Into<String>) -> Self {
        self.for_action = Some(action.into());
        self
    }
}

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub node: NodeId,
    pub title: String,
    /// `None` for nodes without actions.
    pub url: Option<RouteUrl>,
}

impl Resolver {
    /// Title of `node`: action payload, node payload, translated content,
    /// resource default, capitalized node name.
    pub fn title(&self, node: NodeId, options: &TitleOptions, ctx: &RequestContext) -> String {
        let (locale, action, parameters) = self.title_scope(node, options, ctx);
        if let Some(title) = self.payload_text(node, action.as_deref(), TITLE_KEY, &locale, &parameters) {
            return title;
        }

        let route_node = self.tree.node(node);
        if let (Some(resource), Some(action)) = (route_node.resource(), action.as_deref()) {
            return resource.action_title(
                action,
                route_node.name(),
                &locale,
                &self.tree.settings().fallback_locale,
                self.translator.as_ref(),
            );
        }
        capitalize(route_node.name())
    }

    /// Navigation title of `node`. Falls back to [`title`](Self::title).
    pub fn nav_title(&self, node: NodeId, options: &TitleOptions, ctx: &RequestContext) -> String {
        let (locale, action, parameters) = self.title_scope(node, options, ctx);
        if let Some(title) = self.payload_text(node, action.as_deref(), NAV_TITLE_KEY, &locale, &parameters) {
            return title;
        }

        let nav = match (self.tree.node(node).resource(), action.as_deref()) {
            (Some(resource), Some(action)) => resource.action_nav_title(
                action,
                self.active_value(node, ctx),
                &locale,
                &self.tree.settings().fallback_locale,
                self.translator.as_ref(),
            ),
            _ => None,
        };
        nav.unwrap_or_else(|| self.title(node, options, ctx))
    }

    /// Payload text `key` of `node`, checking the action's payload first.
    /// A key missing on the node is looked up as `{content_lang_file}.{key}`.
    pub fn payload_text(
        &self,
        node: NodeId,
        action: Option<&str>,
        key: &str,
        locale: &str,
        parameters: &BTreeMap<String, String>,
    ) -> Option<String> {
        let route_node = self.tree.node(node);
        action
            .and_then(|name| route_node.action(name))
            .and_then(|a| a.payload().text(key, locale, parameters))
            .or_else(|| route_node.payload().text(key, locale, parameters))
            .or_else(|| {
                let translation_key = format!("{}.{key}", route_node.content_lang_file());
                self.translator
                    .lookup(&translation_key, locale)
                    .map(|raw| interpolate(&raw, parameters))
            })
    }

    /// Rootline of the current node with titles and, where the node has
    /// actions, URLs.
    pub fn breadcrumbs(&self, ctx: &RequestContext) -> Vec<Breadcrumb> {
        let Some(current) = ctx.current_node() else {
            return Vec::new();
        };
        self.tree
            .rootline(current, true)
            .into_iter()
            .map(|node| {
                let url = if self.tree.node(node).actions().is_empty() {
                    None
                } else {
                    self.url(node, &UrlOptions::default(), ctx).ok()
                };
                Breadcrumb {
                    node,
                    title: self.nav_title(node, &TitleOptions::default(), ctx),
                    url,
                }
            })
            .collect()
    }

    fn title_scope(
        &self,
        node: NodeId,
        options: &TitleOptions,
        ctx: &RequestContext,
    ) -> (String, Option<String>, BTreeMap<String, String>) {
        let locale = options.locale.clone().unwrap_or_else(|| ctx.locale.clone());
        let action = options.for_action.clone().or_else(|| {
            self.is_active(node, None, ctx)
                .then(|| ctx.current_action().map(str::to_string))
                .flatten()
        });
        let mut parameters = ctx.parameters.clone();
        parameters.extend(options.parameters.clone());
        (locale, action, parameters)
    }
}
