use crate::container::Container;
use crate::error::{BindingError, RouterError};
use crate::handler::Handler;
use crate::middleware::{Middleware, Next};
use crate::request::Request;
use crate::router::{RouteEntry, Router};
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

type DefaultHandler<R> = Box<dyn Fn(&Request) -> R + Send + Sync>;
type ThrowableHandler<R> = Box<dyn Fn(&anyhow::Error, &Request) -> R + Send + Sync>;
type BindingFailureHandler<R> = Box<dyn Fn(&BindingError, &Request) -> R + Send + Sync>;
type OptionsHandler<R> = Box<dyn Fn(&Request) -> R + Send + Sync>;

/// Request dispatcher: route table, middleware registry, and fallback
/// handlers behind a single `dispatch` entry point.
///
/// Registration (`register_*`, `set_*`) takes `&mut self` and must finish
/// before serving begins; dispatch takes `&self`, so a fully built
/// dispatcher can be shared behind an `Arc` across concurrent workers
/// without locking. The response type `R` is opaque: whatever handlers and
/// fallback handlers produce is returned untouched.
pub struct Dispatcher<R> {
    router: Router<R>,
    middlewares: HashMap<String, Arc<dyn Middleware<R>>>,
    container: Option<Arc<dyn Container<R>>>,
    default_handler: Option<DefaultHandler<R>>,
    throwable_handler: Option<ThrowableHandler<R>>,
    binding_failure_handler: Option<BindingFailureHandler<R>>,
    options_handler: Option<OptionsHandler<R>>,
}

impl<R> Default for Dispatcher<R> {
    fn default() -> Self {
        Self {
            router: Router::new(),
            middlewares: HashMap::new(),
            container: None,
            default_handler: None,
            throwable_handler: None,
            binding_failure_handler: None,
            options_handler: None,
        }
    }
}

impl<R> Dispatcher<R> {
    /// A dispatcher with no container. Controller and middleware
    /// registration by identifier will fail; direct registration still
    /// works.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher that resolves controller and middleware identifiers
    /// through `container`.
    pub fn with_container(container: Arc<dyn Container<R>>) -> Self {
        Self {
            container: Some(container),
            ..Self::default()
        }
    }

    /// The underlying route table.
    pub fn router(&self) -> &Router<R> {
        &self.router
    }

    /// Register a single route.
    pub fn register_route(
        &mut self,
        method: Method,
        template: &str,
        handler: Handler<R>,
    ) -> Result<(), RouterError> {
        self.router.add(method, template, handler, None)
    }

    /// Register a single route whose invocation is wrapped by the middleware
    /// registered under `code`.
    pub fn register_route_with_middleware(
        &mut self,
        method: Method,
        template: &str,
        handler: Handler<R>,
        code: impl Into<String>,
    ) -> Result<(), RouterError> {
        self.router.add(method, template, handler, Some(code.into()))
    }

    /// Resolve `id` through the container and register every route the
    /// controller declares, in declaration order, each template prefixed
    /// with the controller's base path.
    ///
    /// Fails with `NotController` when the container has no controller for
    /// `id`; routes registered by earlier calls are unaffected.
    pub fn register_controller(&mut self, id: &str) -> Result<(), RouterError>
    where
        R: 'static,
    {
        let controller = self
            .container
            .as_ref()
            .and_then(|c| c.controller(id))
            .ok_or_else(|| RouterError::NotController(id.to_string()))?;

        let base_path = controller.base_path().to_string();
        for route in controller.routes() {
            let template = format!("{}{}", base_path, route.pattern);
            self.router
                .add(route.method, &template, route.handler, route.middleware)?;
        }
        Ok(())
    }

    /// Register several controllers; stops at the first failure.
    pub fn register_controllers(&mut self, ids: &[&str]) -> Result<(), RouterError>
    where
        R: 'static,
    {
        for id in ids {
            self.register_controller(id)?;
        }
        Ok(())
    }

    /// Resolve `id` through the container and register the middleware under
    /// its own `code()`.
    pub fn register_middleware(&mut self, id: &str) -> Result<(), RouterError>
    where
        R: 'static,
    {
        let middleware = self
            .container
            .as_ref()
            .and_then(|c| c.middleware(id))
            .ok_or_else(|| RouterError::NotMiddleware(id.to_string()))?;
        self.add_middleware(middleware);
        Ok(())
    }

    /// Register several middlewares; stops at the first failure.
    pub fn register_middlewares(&mut self, ids: &[&str]) -> Result<(), RouterError>
    where
        R: 'static,
    {
        for id in ids {
            self.register_middleware(id)?;
        }
        Ok(())
    }

    /// Register a middleware instance directly, keyed by its `code()`.
    pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware<R>>) {
        self.middlewares
            .insert(middleware.code().to_string(), middleware);
    }

    /// Handler invoked when no route matches. Unset, a miss surfaces as
    /// [`RouterError::NoRouteForPath`].
    pub fn set_default_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
    {
        self.default_handler = Some(Box::new(handler));
        self
    }

    pub fn clear_default_handler(&mut self) -> &mut Self {
        self.default_handler = None;
        self
    }

    /// Handler invoked when a route handler or middleware body fails.
    /// Unset, the failure surfaces as [`RouterError::Handler`].
    pub fn set_throwable_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&anyhow::Error, &Request) -> R + Send + Sync + 'static,
    {
        self.throwable_handler = Some(Box::new(handler));
        self
    }

    pub fn clear_throwable_handler(&mut self) -> &mut Self {
        self.throwable_handler = None;
        self
    }

    /// Handler invoked when parameter binding fails. Unset, the failure
    /// surfaces as [`RouterError::Binding`]. Binding failures are checked
    /// before generic failures and never reach the throwable handler.
    pub fn set_binding_failure_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&BindingError, &Request) -> R + Send + Sync + 'static,
    {
        self.binding_failure_handler = Some(Box::new(handler));
        self
    }

    pub fn clear_binding_failure_handler(&mut self) -> &mut Self {
        self.binding_failure_handler = None;
        self
    }

    /// Handler invoked for every OPTIONS request. Unset, OPTIONS surfaces
    /// as [`RouterError::NoOptionsHandler`].
    pub fn set_options_handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
    {
        self.options_handler = Some(Box::new(handler));
        self
    }

    pub fn clear_options_handler(&mut self) -> &mut Self {
        self.options_handler = None;
        self
    }

    /// Dispatch a request.
    ///
    /// OPTIONS requests short-circuit to the OPTIONS handler before any
    /// pattern matching. Otherwise the routes for the request's method are
    /// scanned in registration order; the first match has its captured path
    /// variables merged with body fields and query parameters (captures win
    /// over body, body wins over query), parameters are bound, and the
    /// handler runs either directly or wrapped by its middleware. Failures
    /// resolve through the fallback slots; every unset slot propagates the
    /// underlying [`RouterError`] instead.
    pub fn dispatch(&self, req: &Request) -> Result<R, RouterError> {
        let method = Method::from_bytes(req.method.to_uppercase().as_bytes()).ok();

        if method == Some(Method::OPTIONS) {
            return match &self.options_handler {
                Some(handler) => Ok(handler(req)),
                None => Err(RouterError::NoOptionsHandler),
            };
        }

        if let Some(method) = method {
            if let Some((entry, captures)) = self.router.find(&method, &req.path) {
                debug!(
                    %method,
                    path = %req.path,
                    pattern = entry.pattern.template(),
                    "route matched"
                );
                let available = collect_available(req, captures);
                return self.invoke_route(entry, &available, req);
            }
        }

        debug!(method = %req.method, path = %req.path, "no route matched");
        match &self.default_handler {
            Some(handler) => Ok(handler(req)),
            None => Err(RouterError::NoRouteForPath(req.path.clone())),
        }
    }

    /// Run a matched route, wrapping the terminal step in its middleware
    /// when one is declared. The terminal step carries the full two-tier
    /// failure handling, so middleware and direct invocations behave
    /// identically.
    fn invoke_route(
        &self,
        entry: &RouteEntry<R>,
        available: &HashMap<String, Value>,
        req: &Request,
    ) -> Result<R, RouterError> {
        let terminal = || self.run_with_params(&entry.handler, available, req);

        match &entry.middleware {
            Some(code) => match self.middlewares.get(code) {
                Some(middleware) => middleware.process(req, Next::new(terminal)),
                None => {
                    warn!(code = %code, "route names an unregistered middleware");
                    Err(RouterError::NotMiddleware(code.clone()))
                }
            },
            None => terminal(),
        }
    }

    /// Bind parameters and invoke the handler, translating failures through
    /// the two tiers: binding failures first, generic failures second.
    fn run_with_params(
        &self,
        handler: &Handler<R>,
        available: &HashMap<String, Value>,
        req: &Request,
    ) -> Result<R, RouterError> {
        let args = match handler.signature().bind(available) {
            Ok(args) => args,
            Err(err) => {
                return match &self.binding_failure_handler {
                    Some(handler) => Ok(handler(&err, req)),
                    None => Err(RouterError::Binding(err)),
                }
            }
        };

        match handler.invoke(args) {
            Ok(response) => Ok(response),
            Err(err) => match &self.throwable_handler {
                Some(handler) => Ok(handler(&err, req)),
                None => Err(RouterError::Handler(err)),
            },
        }
    }
}

/// Merge the binding sources for one request. Insertion order encodes
/// precedence: query parameters first, then body-object fields, then path
/// captures, later inserts overriding earlier ones on equal keys.
fn collect_available(req: &Request, captures: HashMap<String, String>) -> HashMap<String, Value> {
    let mut available: HashMap<String, Value> = req
        .query_params
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    if let Some(Value::Object(fields)) = &req.body {
        for (k, v) in fields {
            available.insert(k.clone(), v.clone());
        }
    }

    for (k, v) in captures {
        available.insert(k, Value::String(v));
    }
    available
}
