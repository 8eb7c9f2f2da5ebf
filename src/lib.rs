//! # rxroute
//!
//! A regex-driven HTTP request router: match an incoming request to a
//! registered handler by method and path pattern, bind the handler's
//! declared parameters from path captures, query parameters, and body
//! fields, invoke it inside an optional middleware wrapper, and map any
//! failure through caller-supplied fallback handlers.
//!
//! Transport is out of scope — the host server parses the wire request into
//! a [`Request`] and decides what to do with the handler's response, which
//! the router treats as an opaque type.
//!
//! ## Architecture
//!
//! - **[`router`]** — path pattern compilation and insertion-ordered route
//!   resolution
//! - **[`dispatcher`]** — orchestration: method lookup, pattern scan,
//!   binding, middleware wrapping, layered failure translation
//! - **[`handler`]** — handler callables, declared signatures, parameter
//!   binding
//! - **[`middleware`]** — the interceptor contract and bundled middleware
//! - **[`container`]** — registration-time collaborator traits (object
//!   registry, controller discovery)
//! - **[`request`]** — the request abstraction and query-string parsing
//! - **[`error`]** — error kinds for registration and dispatch
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use rxroute::{Dispatcher, Handler, HandlerSignature, Param, Request};
//!
//! # fn main() -> Result<(), rxroute::RouterError> {
//! let mut dispatcher: Dispatcher<String> = Dispatcher::new();
//!
//! let handler = Handler::new(
//!     HandlerSignature::new(vec![Param::required("id")]),
//!     |args| Ok(format!("pet {}", args[0].as_str().unwrap_or_default())),
//! );
//! dispatcher.register_route(Method::GET, r"/pets/(?P<id>\d+)", handler)?;
//!
//! let response = dispatcher.dispatch(&Request::from_target("GET", "/pets/42"))?;
//! assert_eq!(response, "pet 42");
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch semantics
//!
//! Routes are scanned in registration order and the first match for the
//! request's method wins; overlapping patterns resolve by order, never by
//! specificity. Binding precedence on key collisions is path capture over
//! body field over query parameter. Failures resolve in two tiers — binding
//! failures before generic handler failures — and each of the four fallback
//! slots (no-route, throwable, binding failure, OPTIONS) independently
//! propagates its error kind when unset.

pub mod container;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod request;
pub mod router;

pub use container::{Container, Controller, ControllerRoute};
pub use dispatcher::Dispatcher;
pub use error::{BindingError, RouterError};
pub use handler::{Handler, HandlerArgs, HandlerSignature, Param};
pub use middleware::{Middleware, Next, TracingMiddleware};
pub use request::Request;
pub use router::{PathPattern, RouteEntry, Router};
