//! Resource expansion: seven conventional actions generated for one node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::i18n::{interpolate, LanguageMapping, Translatable, Translator};
use crate::tree::action::{Handler, Method, RouteAction};
use crate::tree::builder::{NodeBuilder, RouteTreeBuilder};
use crate::tree::error::TreeResult;
use crate::tree::node::{NodeId, RouteNode};

pub const CREATE_SEGMENT_KEY: &str = "route-tree.create_segment";
pub const EDIT_SEGMENT_KEY: &str = "route-tree.edit_segment";
pub const CREATE_TITLE_KEY: &str = "route-tree.create_title";
pub const SHOW_TITLE_KEY: &str = "route-tree.show_title";
pub const EDIT_TITLE_KEY: &str = "route-tree.edit_title";
pub const CREATE_NAV_TITLE_KEY: &str = "route-tree.create_nav_title";
pub const EDIT_NAV_TITLE_KEY: &str = "route-tree.edit_nav_title";
pub const DEFAULT_TRANS_KEY: &str = "route-tree.resource";

/// Action names in registration order.
pub const RESOURCE_ACTIONS: [&str; 7] = [
    "index", "create", "store", "show", "edit", "update", "destroy",
];

/// Resource metadata kept on its node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResource {
    name: String,
    controller: String,
    trans_key: String,
}

impl RouteResource {
    /// Parameter name (also the `{name}` placeholder).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn trans_key(&self) -> &str {
        &self.trans_key
    }

    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.name)
    }

    pub(crate) fn attach<'b>(
        node: &'b mut NodeBuilder<'_>,
        name: &str,
        controller: &str,
    ) -> ResourceBuilder<'b> {
        // The parameter segment is contributed by the actions, not by the node.
        node.bind_parameter(name);

        let resource = RouteResource {
            name: name.to_string(),
            controller: controller.to_string(),
            trans_key: DEFAULT_TRANS_KEY.to_string(),
        };
        let placeholder = resource.placeholder();

        // Every configured locale gets a segment: the node may still change
        // its locale subset or drop its prefix after this call.
        let tree = &*node.tree;
        let settings = &tree.settings;
        let static_segment = |key: &str, default: &str| -> LanguageMapping {
            settings
                .locale_iter()
                .map(|locale| {
                    let segment = tree
                        .translator
                        .lookup_or_fallback(key, locale, &settings.fallback_locale)
                        .unwrap_or_else(|| default.to_string());
                    (locale.to_string(), segment)
                })
                .collect()
        };
        let create_segment = static_segment(CREATE_SEGMENT_KEY, "create");
        let edit_segment: LanguageMapping = static_segment(EDIT_SEGMENT_KEY, "edit")
            .iter()
            .map(|(locale, segment)| (locale.to_string(), format!("{placeholder}/{segment}")))
            .collect();
        let param_segment =
            Translatable::Uniform(placeholder.clone()).to_mapping(settings.locale_iter());

        let plan = [
            ("index", Method::Get, None),
            ("create", Method::Get, Some(create_segment)),
            ("store", Method::Post, None),
            ("show", Method::Get, Some(param_segment.clone())),
            ("edit", Method::Get, Some(edit_segment)),
            ("update", Method::Put, Some(param_segment.clone())),
            ("destroy", Method::Delete, Some(param_segment)),
        ];

        let target = node.node_mut();
        for (action, method, segment) in plan {
            let mut route_action = RouteAction::new(
                method,
                Handler::controller(format!("{controller}@{action}")),
                Some(action.to_string()),
            );
            route_action.segment = segment;
            target.actions.push(route_action);
        }
        target.resource = Some(resource);
        tracing::debug!(node = %target.id, resource = name, "Resource attached");

        ResourceBuilder {
            tree: &mut *node.tree,
            node: node.id,
        }
    }

    /// Default title of `action`: singular resource name for create/show/edit
    /// templates, plural for everything else.
    pub fn action_title(
        &self,
        action: &str,
        node_name: &str,
        locale: &str,
        fallback_locale: &str,
        translator: &dyn Translator,
    ) -> String {
        let singular = translator
            .lookup_choice(&self.trans_key, 1, locale)
            .unwrap_or_else(|| capitalize(&self.name));
        let template = match action {
            "create" => (CREATE_TITLE_KEY, "Create {resource}"),
            "show" => (SHOW_TITLE_KEY, "{resource}"),
            "edit" => (EDIT_TITLE_KEY, "Edit {resource}"),
            _ => {
                return translator
                    .lookup_choice(&self.trans_key, 2, locale)
                    .unwrap_or_else(|| capitalize(node_name));
            }
        };
        let template = translator
            .lookup_or_fallback(template.0, locale, fallback_locale)
            .unwrap_or_else(|| template.1.to_string());
        let mut parameters = BTreeMap::new();
        parameters.insert("resource".to_string(), singular);
        interpolate(&template, &parameters)
    }

    /// Default navigation title of `action`. `show` is named after the active
    /// parameter value; `None` means the regular title applies.
    pub fn action_nav_title(
        &self,
        action: &str,
        active_value: Option<&str>,
        locale: &str,
        fallback_locale: &str,
        translator: &dyn Translator,
    ) -> Option<String> {
        let (key, default) = match action {
            "create" => (CREATE_NAV_TITLE_KEY, "Create"),
            "edit" => (EDIT_NAV_TITLE_KEY, "Edit"),
            "show" => return active_value.map(str::to_string),
            _ => return None,
        };
        Some(
            translator
                .lookup_or_fallback(key, locale, fallback_locale)
                .unwrap_or_else(|| default.to_string()),
        )
    }
}

/// Post-attachment configuration of a resource.
pub struct ResourceBuilder<'b> {
    tree: &'b mut RouteTreeBuilder,
    node: NodeId,
}

impl<'b> ResourceBuilder<'b> {
    fn node_mut(&mut self) -> &mut RouteNode {
        &mut self.tree.nodes[self.node.0]
    }

    /// Keep only the named generated actions.
    pub fn only(&mut self, actions: &[&str]) -> &mut Self {
        self.node_mut()
            .actions
            .retain(|a| actions.contains(&a.name.as_str()));
        self
    }

    /// Drop the named generated actions.
    pub fn except(&mut self, actions: &[&str]) -> &mut Self {
        self.node_mut()
            .actions
            .retain(|a| !actions.contains(&a.name.as_str()));
        self
    }

    /// Translation key of the singular/plural resource name.
    pub fn trans_key(&mut self, key: &str) -> &mut Self {
        if let Some(resource) = self.node_mut().resource.as_mut() {
            resource.trans_key = key.to_string();
        }
        self
    }

    pub fn model(&mut self, model: &str) -> &mut Self {
        if let Some(parameter) = self.node_mut().parameter.as_mut() {
            parameter.model(model);
        }
        self
    }

    pub fn route_keys(&mut self, keys: LanguageMapping) -> &mut Self {
        if let Some(parameter) = self.node_mut().parameter.as_mut() {
            parameter.route_keys(keys);
        }
        self
    }

    /// Create a child whose paths include this resource's `{name}` segment.
    pub fn child<F>(&mut self, name: &str, setup: F) -> TreeResult<NodeId>
    where
        F: FnOnce(&mut NodeBuilder<'_>) -> TreeResult<()>,
    {
        let child = self.tree.create_child(self.node, name, setup)?;
        self.tree.nodes[child.0].is_resource_child = true;
        Ok(child)
    }
}

pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryCatalog;

    fn resource() -> RouteResource {
        RouteResource {
            name: "user".into(),
            controller: "UserController".into(),
            trans_key: DEFAULT_TRANS_KEY.into(),
        }
    }

    #[test]
    fn test_action_titles_without_translations() {
        let catalog = MemoryCatalog::new();
        let r = resource();
        assert_eq!(r.action_title("create", "users", "en", "en", &catalog), "Create User");
        assert_eq!(r.action_title("edit", "users", "en", "en", &catalog), "Edit User");
        assert_eq!(r.action_title("show", "users", "en", "en", &catalog), "User");
        assert_eq!(r.action_title("index", "users", "en", "en", &catalog), "Users");
    }

    #[test]
    fn test_action_titles_translated() {
        let catalog = MemoryCatalog::new()
            .with("de", DEFAULT_TRANS_KEY, "Benutzer|Benutzerinnen")
            .with("de", CREATE_TITLE_KEY, "{resource} anlegen")
            .with("en", EDIT_TITLE_KEY, "Edit {resource}");
        let r = resource();
        assert_eq!(r.action_title("create", "users", "de", "en", &catalog), "Benutzer anlegen");
        assert_eq!(r.action_title("edit", "users", "de", "en", &catalog), "Edit Benutzer");
        assert_eq!(r.action_title("destroy", "users", "de", "en", &catalog), "Benutzerinnen");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("team"), "Team");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("über"), "Über");
    }
}
