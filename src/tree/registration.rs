//! Host router boundary.

use serde::{Deserialize, Serialize};

use crate::tree::action::{Handler, Method};
use crate::tree::node::Middleware;

/// Everything a host router needs to register one compiled action in one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRegistration {
    pub method: Method,
    /// Path template with a leading slash and `{param}` placeholders.
    pub path: String,
    pub handler: Handler,
    pub middleware: Vec<Middleware>,
    /// `{locale}.{node id}.{action}`.
    pub name: String,
    pub namespace: String,
    pub locale: String,
    /// Id of the owning node.
    pub node: String,
    pub action: String,
}

/// Receives compiled routes. Implemented by host router adapters.
pub trait HostRouter {
    fn register(&mut self, route: &RouteRegistration);
}

/// Collects registrations; handy for inspection and tests.
impl HostRouter for Vec<RouteRegistration> {
    fn register(&mut self, route: &RouteRegistration) {
        self.push(route.clone());
    }
}

/// Route name made of the non-empty parts joined by dots.
pub(crate) fn route_name(locale: &str, node_id: &str, action: &str) -> String {
    [locale, node_id, action]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
