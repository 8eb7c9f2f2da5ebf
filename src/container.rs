use crate::handler::Handler;
use crate::middleware::Middleware;
use http::Method;
use std::sync::Arc;

/// One handler declaration produced by controller discovery: the method and
/// path template it serves, the handler itself, and an optional middleware
/// key the dispatcher resolves per request.
pub struct ControllerRoute<R> {
    pub method: Method,
    pub pattern: String,
    pub handler: Handler<R>,
    pub middleware: Option<String>,
}

impl<R> ControllerRoute<R> {
    pub fn new(method: Method, pattern: impl Into<String>, handler: Handler<R>) -> Self {
        Self {
            method,
            pattern: pattern.into(),
            handler,
            middleware: None,
        }
    }

    pub fn with_middleware(mut self, code: impl Into<String>) -> Self {
        self.middleware = Some(code.into());
        self
    }
}

/// A discovered controller: an optional base path plus its handler routes.
///
/// This is the registration-time face of whatever discovery mechanism the
/// host uses (attribute scanning, a declaration table, hand-written lists).
/// The router consumes the declared routes once, in the order given; it
/// never sorts or deduplicates them.
pub trait Controller<R: 'static> {
    /// Path prefix applied to every route template of this controller.
    fn base_path(&self) -> &str {
        ""
    }

    /// Declared handler routes, in registration order.
    fn routes(&self) -> Vec<ControllerRoute<R>>;
}

/// Object registry that resolves controller and middleware identifiers.
///
/// Consulted only during registration, never during dispatch. An unknown
/// identifier resolves to `None`, which the registering call reports as
/// `NotController` / `NotMiddleware`.
pub trait Container<R: 'static> {
    fn controller(&self, id: &str) -> Option<Arc<dyn Controller<R>>>;
    fn middleware(&self, id: &str) -> Option<Arc<dyn Middleware<R>>>;
}
