//! Active-state queries: which node and action the current request is on.

use std::collections::BTreeMap;

use crate::resolve::context::RequestContext;
use crate::resolve::resolver::Resolver;
use crate::resolve::url::UrlOptions;
use crate::tree::NodeId;

impl Resolver {
    /// Path of the current request: the host-provided one, else the URL of
    /// the matched action.
    pub fn current_path(&self, ctx: &RequestContext) -> Option<String> {
        if let Some(path) = &ctx.path {
            return Some(path.clone());
        }
        let (node, action) = ctx.current.as_ref()?;
        self.url_by_action(*node, action, &UrlOptions::default(), ctx)
            .ok()
            .map(|url| url.path().to_string())
    }

    /// The action of `node` whose URL is the longest string prefix of the
    /// current request's path. On equal lengths the earlier action wins.
    pub fn lowest_rootline_action(&self, node: NodeId, ctx: &RequestContext) -> Option<&str> {
        let current = self.current_path(ctx)?;
        let options = UrlOptions::default();

        let mut best: Option<(&str, usize)> = None;
        for action in self.tree.node(node).actions() {
            let Ok(url) = self.url_by_action(node, action.name(), &options, ctx) else {
                continue;
            };
            let len = url.path().len();
            if current.starts_with(url.path()) && best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((action.name(), len));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Whether `node` is the current node and, when `parameters` are given,
    /// each of them equals the current request's value.
    pub fn is_active(
        &self,
        node: NodeId,
        parameters: Option<&BTreeMap<String, String>>,
        ctx: &RequestContext,
    ) -> bool {
        if ctx.current_node() != Some(node) {
            return false;
        }
        parameters.map_or(true, |wanted| {
            wanted
                .iter()
                .all(|(name, value)| ctx.parameters.get(name) == Some(value))
        })
    }

    /// Whether `node` is the current node or one of its ancestors.
    pub fn node_or_child_is_active(&self, node: NodeId, ctx: &RequestContext) -> bool {
        ctx.current_node()
            .is_some_and(|current| self.tree.rootline(current, true).contains(&node))
    }

    /// Current value of the parameter bound on `node`, if the request runs
    /// through it.
    pub fn active_value<'c>(&self, node: NodeId, ctx: &'c RequestContext) -> Option<&'c str> {
        if !self.node_or_child_is_active(node, ctx) {
            return None;
        }
        let parameter = self.tree.node(node).parameter()?;
        ctx.parameters.get(parameter.name()).map(String::as_str)
    }

    /// Valid values of the parameter bound on `node` in `locale`.
    pub fn values(&self, node: NodeId, locale: &str) -> Option<&[String]> {
        self.tree.node(node).parameter()?.values_for(locale)
    }
}
