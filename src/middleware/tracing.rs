use super::{Middleware, Next};
use crate::error::RouterError;
use crate::request::Request;
use std::time::Instant;
use tracing::info_span;

/// Middleware that wraps handler invocation in a tracing span.
///
/// Records the request method and path, delegates to `next`, and logs the
/// outcome with the handler latency. Registered under the key `tracing`
/// unless overridden with [`with_code`].
///
/// [`with_code`]: TracingMiddleware::with_code
pub struct TracingMiddleware {
    code: String,
}

impl Default for TracingMiddleware {
    fn default() -> Self {
        Self {
            code: "tracing".to_string(),
        }
    }
}

impl TracingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom registration key instead of `tracing`.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl<R> Middleware<R> for TracingMiddleware {
    fn code(&self) -> &str {
        &self.code
    }

    fn process(&self, req: &Request, next: Next<'_, R>) -> Result<R, RouterError> {
        let span = info_span!("request", method = %req.method, path = %req.path);
        let _guard = span.enter();

        let start = Instant::now();
        let result = next.run();
        let latency_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => tracing::debug!(latency_ms, "handler completed"),
            Err(err) => tracing::debug!(latency_ms, error = %err, "handler failed"),
        }
        result
    }
}
