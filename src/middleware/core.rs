use crate::error::RouterError;
use crate::request::Request;

/// Deferred terminal step of a dispatch.
///
/// Running it performs parameter binding and handler invocation, then
/// funnels any failure through the same two-tier handling (binding failures
/// first, generic failures second) that an unwrapped dispatch uses, so a
/// middleware observes identical behavior to the direct path.
pub struct Next<'a, R> {
    inner: Box<dyn FnOnce() -> Result<R, RouterError> + 'a>,
}

impl<'a, R> Next<'a, R> {
    pub(crate) fn new(inner: impl FnOnce() -> Result<R, RouterError> + 'a) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    /// Bind parameters and invoke the terminal handler.
    pub fn run(self) -> Result<R, RouterError> {
        (self.inner)()
    }
}

/// A request interceptor wrapped around handler invocation.
///
/// A middleware is registered under the key returned by [`code`], and routes
/// opt in by naming that key. `process` may inspect or rewrite nothing and
/// delegate straight to `next`, replace the response after `next` returns,
/// or short-circuit by never running `next` at all.
///
/// [`code`]: Middleware::code
pub trait Middleware<R>: Send + Sync {
    /// Key under which this middleware is registered and referenced by
    /// routes.
    fn code(&self) -> &str;

    /// Process the request around the terminal step `next`.
    fn process(&self, req: &Request, next: Next<'_, R>) -> Result<R, RouterError>;
}
