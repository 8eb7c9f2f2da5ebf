//! # Router Module
//!
//! Path matching and route resolution. Route templates are regular
//! expressions compiled once at registration time into anchored,
//! case-insensitive matchers whose named capture groups feed parameter
//! binding.
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: at registration, a template such as
//!    `/pets/(?P<id>\d+)` is wrapped in `^...$` anchors and compiled.
//!    Malformed templates fail the registering call immediately.
//!
//! 2. **Matching**: for each incoming request, the entries registered for
//!    the request's method are tested in registration order; the first match
//!    wins and its named captures are returned. Overlap between patterns is
//!    resolved by order, never by specificity.

mod core;
mod pattern;

pub use core::{RouteEntry, Router};
pub use pattern::PathPattern;
