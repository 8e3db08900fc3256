//! URL resolution for compiled nodes.

use std::sync::Arc;

use url::Url;

use crate::config::UrlConfig;
use crate::i18n::Translator;
use crate::resolve::context::RequestContext;
use crate::resolve::url::{normalize_base, substitute, RouteUrl, UrlOptions};
use crate::tree::registration::route_name;
use crate::tree::{CompiledTree, NodeId, RouteAction, TreeError, TreeResult};

/// Action names preferred by [`Resolver::url`], in order.
const URL_ACTION_PRIORITY: [&str; 2] = ["index", "get"];

/// Read-only query surface over a compiled tree.
///
/// Cloning is cheap; every clone shares the same tree and translator.
#[derive(Clone)]
pub struct Resolver {
    pub(crate) tree: Arc<CompiledTree>,
    pub(crate) translator: Arc<dyn Translator>,
    base_url: Option<Url>,
    absolute: bool,
}

impl Resolver {
    pub fn new(tree: Arc<CompiledTree>, translator: Arc<dyn Translator>) -> Self {
        Self {
            tree,
            translator,
            base_url: None,
            absolute: false,
        }
    }

    /// Apply the `[urls]` configuration section.
    pub fn with_urls(mut self, config: &UrlConfig) -> TreeResult<Self> {
        self.base_url = config.base_url.as_deref().map(normalize_base).transpose()?;
        self.absolute = config.absolute;
        Ok(self)
    }

    pub fn tree(&self) -> &CompiledTree {
        &self.tree
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// URL of the node's primary action: `index`, else `get`, else the first
    /// registered one.
    pub fn url(&self, node: NodeId, options: &UrlOptions, ctx: &RequestContext) -> TreeResult<RouteUrl> {
        let action = self.primary_action(node)?;
        self.url_by_action(node, action.name(), options, ctx)
    }

    /// [`url`](Self::url) for a dotted node id.
    pub fn url_by_id(&self, id: &str, options: &UrlOptions, ctx: &RequestContext) -> TreeResult<RouteUrl> {
        self.url(self.tree.find(id)?, options, ctx)
    }

    /// URL of a named action. Parameters not given in `options` are taken
    /// from the current request.
    pub fn url_by_action(
        &self,
        node: NodeId,
        action: &str,
        options: &UrlOptions,
        ctx: &RequestContext,
    ) -> TreeResult<RouteUrl> {
        let route_node = self.tree.node(node);
        let route_action = route_node
            .action(action)
            .ok_or_else(|| TreeError::ActionNotFound {
                node: route_node.id().to_string(),
                action: action.to_string(),
            })?;
        let locale = options.locale.as_deref().unwrap_or(&ctx.locale);
        let template = self.template(node, route_action, locale)?;

        let path = substitute(template, &options.parameters, &ctx.parameters).map_err(|missing| {
            TreeError::MissingUrlParameter {
                route: route_name(locale, route_node.id(), action),
                missing,
            }
        })?;

        let base = if options.absolute.unwrap_or(self.absolute) {
            self.base_url.as_ref()
        } else {
            None
        };
        Ok(RouteUrl::new(format!("/{path}"), base)?)
    }

    pub(crate) fn primary_action(&self, node: NodeId) -> TreeResult<&RouteAction> {
        let route_node = self.tree.node(node);
        URL_ACTION_PRIORITY
            .iter()
            .find_map(|name| route_node.action(name))
            .or_else(|| route_node.actions().first())
            .ok_or_else(|| TreeError::NoActionAvailable {
                node: route_node.id().to_string(),
            })
    }

    /// Path template of `action` in `locale`. Nodes without a locale prefix
    /// only carry the default locale's path, which serves every locale.
    fn template<'t>(&self, node: NodeId, action: &'t RouteAction, locale: &str) -> TreeResult<&'t str> {
        if let Some(path) = action.path(locale) {
            return Ok(path);
        }
        let settings = self.tree.settings();
        let route_node = self.tree.node(node);
        let unprefixed = settings.no_locale_prefix || route_node.no_locale_prefix();
        unprefixed
            .then(|| action.path(&settings.default_locale))
            .flatten()
            .ok_or_else(|| TreeError::LocaleNotAvailable {
                node: route_node.id().to_string(),
                locale: locale.to_string(),
            })
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("nodes", &self.tree.len())
            .field("base_url", &self.base_url)
            .field("absolute", &self.absolute)
            .finish()
    }
}
