use crate::error::RouterError;
use crate::handler::Handler;
use crate::router::pattern::PathPattern;
use http::Method;
use std::collections::HashMap;
use std::fmt;

/// Methods the route table accepts. OPTIONS is deliberately absent: the
/// dispatcher short-circuits OPTIONS requests before pattern matching, so an
/// OPTIONS route could never be reached.
const SUPPORTED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
];

/// One registered route: method, compiled pattern, handler, and an optional
/// middleware key resolved at dispatch time. Immutable once inserted.
pub struct RouteEntry<R> {
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: Handler<R>,
    pub middleware: Option<String>,
}

impl<R> fmt::Debug for RouteEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("pattern", &self.pattern.template())
            .field("middleware", &self.middleware)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered route table.
///
/// Entries are scanned in registration order and the first match for the
/// request's method wins. Registering the same method and template twice
/// keeps both entries; the earlier one shadows the later. The table grows
/// during setup and is read-only during dispatch, so concurrent reads are
/// safe once registration is done.
pub struct Router<R> {
    routes: Vec<RouteEntry<R>>,
}

impl<R> Default for Router<R> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<R> Router<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `template` and append a route for `method`.
    ///
    /// Compilation failures surface immediately and leave the table
    /// unchanged. A route for a method outside the supported set is accepted
    /// but unreachable, so it is dropped with a debug log instead of stored.
    pub fn add(
        &mut self,
        method: Method,
        template: &str,
        handler: Handler<R>,
        middleware: Option<String>,
    ) -> Result<(), RouterError> {
        let pattern = PathPattern::compile(template)?;
        if !SUPPORTED_METHODS.contains(&method) {
            tracing::debug!(%method, template, "ignoring route for unsupported method");
            return Ok(());
        }
        self.routes.push(RouteEntry {
            method,
            pattern,
            handler,
            middleware,
        });
        Ok(())
    }

    /// Ordered routes registered for `method`.
    pub fn routes_for<'a>(&'a self, method: &Method) -> impl Iterator<Item = &'a RouteEntry<R>> {
        let method = method.clone();
        self.routes.iter().filter(move |r| r.method == method)
    }

    /// First entry whose pattern matches `path`, with its captured path
    /// variables. Registration order decides between overlapping patterns,
    /// never specificity.
    pub fn find(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(&RouteEntry<R>, HashMap<String, String>)> {
        self.routes_for(method)
            .find_map(|entry| entry.pattern.matches(path).map(|captures| (entry, captures)))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .finish()
    }
}
