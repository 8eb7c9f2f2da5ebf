//! Pluggable request middleware.
//!
//! A middleware observes a request before the terminal handler runs and may
//! short-circuit it entirely. Middleware are registered by string key and
//! attached per-route; see [`Middleware`] for the contract.

mod core;
mod tracing;

pub use core::{Middleware, Next};
pub use tracing::TracingMiddleware;
