use crate::error::BindingError;
use serde_json::Value;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Positional argument list produced by parameter binding.
///
/// Most handlers take a handful of parameters, so arguments live on the
/// stack during dispatch.
pub type HandlerArgs = SmallVec<[Value; 4]>;

/// A single declared handler parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Parameter name, matched against the available-value map
    pub name: String,
    /// Value used when no source supplies the parameter
    pub default: Option<Value>,
    /// Whether the parameter accepts a resolved `Value::Null`
    pub nullable: bool,
}

impl Param {
    /// A parameter that must resolve to a non-null value.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            nullable: false,
        }
    }

    /// A parameter that falls back to `default` when no source supplies it.
    pub fn with_default(name: impl Into<String>, default: Value) -> Self {
        Self {
            name: name.into(),
            default: Some(default),
            nullable: false,
        }
    }

    /// A parameter that accepts null; it resolves to `Value::Null` when
    /// missing.
    pub fn nullable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            nullable: true,
        }
    }
}

/// Ordered parameter declaration for a handler.
///
/// Declared explicitly at handler construction time rather than introspected
/// from the callable, so binding needs no runtime reflection. Order is
/// significant: bound arguments are positional in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandlerSignature {
    params: Vec<Param>,
}

impl HandlerSignature {
    /// A signature with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Resolve the signature against the per-request available-value map.
    ///
    /// Each parameter takes, in order of preference: the value supplied under
    /// its name, its declared default, or `Value::Null`. A resolved null for
    /// a non-nullable parameter fails with a [`BindingError`] naming that
    /// parameter. No other coercion is performed; value types are the
    /// handler's concern.
    pub fn bind(
        &self,
        available: &std::collections::HashMap<String, Value>,
    ) -> Result<HandlerArgs, BindingError> {
        let mut args = HandlerArgs::with_capacity(self.params.len());
        for param in &self.params {
            let value = available
                .get(&param.name)
                .cloned()
                .or_else(|| param.default.clone())
                .unwrap_or(Value::Null);

            if value.is_null() && !param.nullable {
                return Err(BindingError::new(param.name.clone()));
            }
            args.push(value);
        }
        Ok(args)
    }
}

/// A route handler: a declared signature plus the callable it feeds.
///
/// The callable receives bound arguments positionally and returns either the
/// caller's response type `R` or a generic failure routed through the
/// throwable tier. Handlers are cheap to clone; the callable is shared.
#[derive(Clone)]
pub struct Handler<R> {
    signature: HandlerSignature,
    func: Arc<dyn Fn(HandlerArgs) -> anyhow::Result<R> + Send + Sync>,
}

impl<R> Handler<R> {
    pub fn new<F>(signature: HandlerSignature, func: F) -> Self
    where
        F: Fn(HandlerArgs) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self {
            signature,
            func: Arc::new(func),
        }
    }

    pub fn signature(&self) -> &HandlerSignature {
        &self.signature
    }

    /// Invoke the callable with already-bound arguments.
    pub fn invoke(&self, args: HandlerArgs) -> anyhow::Result<R> {
        (self.func)(args)
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
