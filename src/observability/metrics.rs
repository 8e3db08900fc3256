//! Route tree counters.
//!
//! # Metrics
//! - `route_tree_nodes_compiled_total` (counter): nodes frozen by compile
//! - `route_tree_routes_registered_total` (counter): routes handed to a host router
//! - `route_tree_cache_events_total` (counter): cache `hit`, `miss`, `store`, `clear`, `stale`, `corrupt`
//!
//! Recorded through the `metrics` facade; without an installed recorder these are no-ops.

pub const NODES_COMPILED: &str = "route_tree_nodes_compiled_total";
pub const ROUTES_COMPILED: &str = "route_tree_routes_compiled_total";
pub const ROUTES_REGISTERED: &str = "route_tree_routes_registered_total";
pub const CACHE_EVENTS: &str = "route_tree_cache_events_total";

pub fn record_compiled(nodes: usize, routes: usize) {
    metrics::counter!(NODES_COMPILED).increment(nodes as u64);
    metrics::counter!(ROUTES_COMPILED).increment(routes as u64);
}

pub fn record_registered(routes: usize) {
    metrics::counter!(ROUTES_REGISTERED).increment(routes as u64);
}

pub fn record_cache_event(event: &'static str) {
    metrics::counter!(CACHE_EVENTS, "event" => event).increment(1);
}
