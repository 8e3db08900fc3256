//! `HostRouter` implementation backed by an axum `Router`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    handler::Handler as AxumHandler,
    http::{header, StatusCode},
    routing::{any, on, MethodFilter, MethodRouter},
    Extension, Router,
};

use crate::http::matched::{MatchedRoute, ViewData};
use crate::tree::{Handler, HostRouter, Method, RouteRegistration};

type RouteFactory<S> = Arc<dyn Fn(Option<MethodFilter>) -> MethodRouter<S> + Send + Sync>;
type MiddlewareFn<S> = Arc<dyn Fn(MethodRouter<S>, &[String]) -> MethodRouter<S> + Send + Sync>;

/// Builds an axum router from compiled route registrations.
///
/// ```ignore
/// let mut host = AxumHost::new()
///     .handler("PageController@show", show_page)
///     .middleware("auth", |route, _| route.layer(auth_layer()));
/// tree.register_with(&mut host);
/// let app = host.into_router();
/// ```
pub struct AxumHost<S = ()> {
    handlers: HashMap<String, RouteFactory<S>>,
    views: HashMap<String, RouteFactory<S>>,
    middleware: HashMap<String, MiddlewareFn<S>>,
    routes: BTreeMap<String, PathEntry<S>>,
    registered: Vec<String>,
}

struct PathEntry<S> {
    router: MethodRouter<S>,
    methods: Vec<Method>,
}

impl<S> Default for AxumHost<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            views: HashMap::new(),
            middleware: HashMap::new(),
            routes: BTreeMap::new(),
            registered: Vec::new(),
        }
    }
}

impl<S> AxumHost<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve controller references equal to `key`.
    pub fn handler<H, T>(mut self, key: &str, handler: H) -> Self
    where
        H: AxumHandler<T, S>,
        T: 'static,
    {
        self.handlers.insert(key.to_string(), factory(handler));
        self
    }

    /// Serve view actions rendering `name`.
    pub fn view<H, T>(mut self, name: &str, handler: H) -> Self
    where
        H: AxumHandler<T, S>,
        T: 'static,
    {
        self.views.insert(name.to_string(), factory(handler));
        self
    }

    /// Named middleware. The function receives the route and the parameters
    /// the tree configured for it.
    pub fn middleware<F>(mut self, name: &str, apply: F) -> Self
    where
        F: Fn(MethodRouter<S>, &[String]) -> MethodRouter<S> + Send + Sync + 'static,
    {
        self.middleware.insert(name.to_string(), Arc::new(apply));
        self
    }

    /// Names of the routes registered so far.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    pub fn into_router(self) -> Router<S> {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, (path, entry)| router.route(&path, entry.router))
    }

    fn endpoint(&self, route: &RouteRegistration) -> Option<MethodRouter<S>> {
        let filter = method_filter(route.method);
        match &route.handler {
            Handler::Controller { target } => {
                let namespaced = format!("{}::{}", route.namespace, target);
                let make = self
                    .handlers
                    .get(&namespaced)
                    .or_else(|| self.handlers.get(target))?;
                Some(make(filter))
            }
            Handler::View { view, data } => {
                let make = self.views.get(view)?;
                Some(make(filter).layer(Extension(ViewData(data.clone()))))
            }
            Handler::Redirect { destination, status } => {
                let status = StatusCode::from_u16(*status).ok()?;
                let destination = destination.clone();
                let redirect = move || {
                    let destination = destination.clone();
                    async move { (status, [(header::LOCATION, destination)]) }
                };
                Some(factory(redirect)(filter))
            }
        }
    }
}

impl<S> HostRouter for AxumHost<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn register(&mut self, route: &RouteRegistration) {
        let Some(mut endpoint) = self.endpoint(route) else {
            tracing::warn!(name = %route.name, handler = %route.handler, "No handler for route, skipping");
            return;
        };

        for middleware in &route.middleware {
            match self.middleware.get(&middleware.name) {
                Some(apply) => endpoint = apply(endpoint, middleware.parameters.as_slice()),
                None => tracing::warn!(
                    name = %route.name,
                    middleware = %middleware.name,
                    "Unknown middleware, skipping"
                ),
            }
        }

        let endpoint = endpoint.layer(Extension(MatchedRoute {
            node: route.node.clone(),
            action: route.action.clone(),
            locale: route.locale.clone(),
            name: route.name.clone(),
        }));

        match self.routes.remove(&route.path) {
            None => {
                self.routes.insert(
                    route.path.clone(),
                    PathEntry {
                        router: endpoint,
                        methods: vec![route.method],
                    },
                );
            }
            Some(mut entry) => {
                if overlaps(&entry.methods, route.method) {
                    tracing::warn!(
                        name = %route.name,
                        path = %route.path,
                        method = %route.method,
                        "Method already registered for path, skipping"
                    );
                    self.routes.insert(route.path.clone(), entry);
                    return;
                }
                entry.router = entry.router.merge(endpoint);
                entry.methods.push(route.method);
                self.routes.insert(route.path.clone(), entry);
            }
        }
        self.registered.push(route.name.clone());
    }
}

fn factory<H, T, S>(handler: H) -> RouteFactory<S>
where
    H: AxumHandler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    Arc::new(move |filter: Option<MethodFilter>| match filter {
        Some(filter) => on(filter, handler.clone()),
        None => any(handler.clone()),
    })
}

fn method_filter(method: Method) -> Option<MethodFilter> {
    match method {
        Method::Get => Some(MethodFilter::GET),
        Method::Post => Some(MethodFilter::POST),
        Method::Put => Some(MethodFilter::PUT),
        Method::Patch => Some(MethodFilter::PATCH),
        Method::Delete => Some(MethodFilter::DELETE),
        Method::Options => Some(MethodFilter::OPTIONS),
        Method::Any => None,
    }
}

fn overlaps(existing: &[Method], method: Method) -> bool {
    method == Method::Any || existing.iter().any(|m| *m == method || *m == Method::Any)
}
