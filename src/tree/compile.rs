//! Compile pass: auto segments, per-locale paths and host registrations.
//!
//! # Design Decisions
//! - Depth-first, parent before children: a child's path reads segments its
//!   ancestors finalised when they were compiled
//! - A node's whole subtree is compiled (and registered) before the node's
//!   own actions, so deeper routes reach the host first
//! - Single-threaded; the builder is consumed

use std::collections::BTreeMap;

use crate::i18n::Translator;
use crate::observability::metrics;
use crate::tree::builder::{RouteTreeBuilder, TreeSettings};
use crate::tree::compiled::CompiledTree;
use crate::tree::node::{NodeId, RouteNode};
use crate::tree::registration::{route_name, RouteRegistration};

impl RouteTreeBuilder {
    /// Freeze the tree: resolve every segment and path, and derive the host
    /// registrations.
    pub fn compile(self) -> CompiledTree {
        let RouteTreeBuilder {
            settings,
            translator,
            mut nodes,
            index,
        } = self;

        let mut routes = Vec::new();
        compile_node(&mut nodes, NodeId::ROOT, &settings, translator.as_ref(), &mut routes);

        metrics::record_compiled(nodes.len(), routes.len());
        tracing::info!(
            nodes = nodes.len(),
            routes = routes.len(),
            locales = ?settings.locales,
            "Route tree compiled"
        );

        CompiledTree::new(settings, nodes, index, routes)
    }
}

fn compile_node(
    nodes: &mut [RouteNode],
    id: NodeId,
    settings: &TreeSettings,
    translator: &dyn Translator,
    routes: &mut Vec<RouteRegistration>,
) {
    {
        let RouteNode {
            name,
            segments,
            content_lang_file,
            ..
        } = &mut nodes[id.0];
        let key = format!("{content_lang_file}.segment.{name}");
        segments.fill_auto(name, &key, settings.locale_iter(), translator);
    }

    let paths: BTreeMap<String, String> = settings
        .node_locales(&nodes[id.0])
        .into_iter()
        .map(|locale| {
            let path = compile_path(nodes, id, &locale, settings);
            (locale, path)
        })
        .collect();

    let node = &mut nodes[id.0];
    for action in &mut node.actions {
        action.paths = paths
            .iter()
            .map(|(locale, path)| {
                let full = match action.segment(locale) {
                    Some(segment) if !segment.is_empty() => join_path(path, segment),
                    _ => path.clone(),
                };
                (locale.clone(), full)
            })
            .collect();
    }
    node.paths = paths;
    tracing::debug!(node = %node.id, paths = ?node.paths, "Route node compiled");

    let children = node.children.clone();
    for child in children {
        compile_node(nodes, child, settings, translator, routes);
    }

    routes.extend(registrations(&nodes[id.0]));
}

/// Full path of `id` in `locale`, without a leading slash.
///
/// Reads the segments of every ancestor, so those must already be resolved.
pub(crate) fn compile_path(
    nodes: &[RouteNode],
    id: NodeId,
    locale: &str,
    settings: &TreeSettings,
) -> String {
    let node = &nodes[id.0];
    let mut segments: Vec<String> = Vec::new();

    if !(settings.no_locale_prefix || node.no_locale_prefix) {
        segments.push(locale.to_string());
    }

    for ancestor in rootline(nodes, id, false) {
        let ancestor = &nodes[ancestor.0];
        if let Some(placeholder) = resource_placeholder(nodes, ancestor) {
            segments.push(placeholder);
        }
        if ancestor.segments.inherit() {
            let segment = ancestor.segments.get(locale);
            if !segment.is_empty() {
                segments.push(segment.to_string());
            }
        }
    }

    if let Some(placeholder) = resource_placeholder(nodes, node) {
        segments.push(placeholder);
    }

    let own = node.segments.get(locale);
    if !own.is_empty() {
        segments.push(own.to_string());
    }

    segments.join("/")
}

/// `{name}` of the parent's resource, for resource children.
fn resource_placeholder(nodes: &[RouteNode], node: &RouteNode) -> Option<String> {
    if !node.is_resource_child {
        return None;
    }
    let parent = &nodes[node.parent?.0];
    parent.resource.as_ref().map(|resource| resource.placeholder())
}

/// Ancestors of `id`, root first, optionally followed by `id` itself.
pub(crate) fn rootline(nodes: &[RouteNode], id: NodeId, include_current: bool) -> Vec<NodeId> {
    let mut line = Vec::new();
    let mut cursor = nodes[id.0].parent;
    while let Some(parent) = cursor {
        line.push(parent);
        cursor = nodes[parent.0].parent;
    }
    line.reverse();
    if include_current {
        line.push(id);
    }
    line
}

fn join_path(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{base}/{segment}")
    }
}

fn registrations(node: &RouteNode) -> Vec<RouteRegistration> {
    let middleware: Vec<_> = node.middleware(false).into_iter().cloned().collect();
    node.actions
        .iter()
        .flat_map(|action| {
            let middleware = middleware.clone();
            action.paths.iter().map(move |(locale, path)| RouteRegistration {
                method: action.method,
                path: format!("/{path}"),
                handler: action.handler.clone(),
                middleware: middleware.clone(),
                name: route_name(locale, &node.id, &action.name),
                namespace: node.namespace.clone(),
                locale: locale.clone(),
                node: node.id.clone(),
                action: action.name.clone(),
            })
        })
        .collect()
}
