use std::fmt;

/// A required handler parameter could not be resolved.
///
/// Raised by the parameter binder when a parameter has no supplied value, no
/// declared default, and is not nullable. Carried separately from
/// [`RouterError`] so callers (and the dispatcher's two-tier failure
/// handling) can distinguish a binding failure from a handler that ran and
/// failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingError {
    /// Name of the parameter that could not be resolved
    pub parameter: String,
}

impl BindingError {
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} can't be null", self.parameter)
    }
}

impl std::error::Error for BindingError {}

/// Errors surfaced by registration and dispatch.
///
/// Registration-time variants (`NotController`, `NotMiddleware`,
/// `InvalidPattern`) fail the registration call that produced them and leave
/// previously registered routes intact. Dispatch-time variants are returned
/// only when the corresponding fallback handler slot is unset.
#[derive(Debug)]
pub enum RouterError {
    /// The container resolved no controller for the given identifier
    NotController(String),
    /// The container resolved no middleware for the given identifier, or a
    /// matched route names a middleware key that was never registered
    NotMiddleware(String),
    /// A path template failed to compile at registration time
    InvalidPattern {
        /// The template that failed to compile
        pattern: String,
        /// Compile error reported by the regex engine
        source: regex::Error,
    },
    /// Parameter binding failed and no binding-failure handler is set
    Binding(BindingError),
    /// A handler or middleware body failed and no throwable handler is set
    Handler(anyhow::Error),
    /// No route matched the request and no default handler is set
    NoRouteForPath(String),
    /// An OPTIONS request arrived with no OPTIONS handler registered
    NoOptionsHandler,
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::NotController(id) => {
                write!(f, "Class {id} not found")
            }
            RouterError::NotMiddleware(id) => {
                write!(f, "Middleware {id} not found")
            }
            RouterError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid route pattern '{pattern}': {source}")
            }
            RouterError::Binding(err) => write!(f, "{err}"),
            RouterError::Handler(err) => write!(f, "{err}"),
            RouterError::NoRouteForPath(path) => {
                write!(f, "No method for path {path} was found.")
            }
            RouterError::NoOptionsHandler => {
                write!(f, "No handler registered for OPTIONS requests")
            }
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::InvalidPattern { source, .. } => Some(source),
            RouterError::Binding(err) => Some(err),
            RouterError::Handler(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<BindingError> for RouterError {
    fn from(err: BindingError) -> Self {
        RouterError::Binding(err)
    }
}
