use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Incoming HTTP request data consumed by the dispatcher.
///
/// The router does not own transport concerns; the host server parses the
/// wire request and hands over the pieces the dispatch pipeline needs:
/// method, path, decoded query parameters, and an optional parsed body.
/// Requests are passed opaquely to handlers, middleware, and fallback
/// handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method, matched case-insensitively
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// Decoded query string parameters
    pub query_params: HashMap<String, String>,
    /// Parsed request body, if any. Only object bodies contribute fields to
    /// parameter binding.
    pub body: Option<Value>,
}

impl Request {
    /// Create a request with no query parameters and no body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query_params: HashMap::new(),
            body: None,
        }
    }

    /// Create a request from a request target such as `/users?limit=10`,
    /// splitting off and decoding the query string.
    pub fn from_target(method: impl Into<String>, target: &str) -> Self {
        let (path, query_params) = match target.find('?') {
            Some(pos) => (&target[..pos], parse_query_params(&target[pos + 1..])),
            None => (target, HashMap::new()),
        };
        Self {
            method: method.into(),
            path: path.to_string(),
            query_params,
            body: None,
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Parse a raw query string into a parameter map.
///
/// Names and values are percent-decoded; `+` decodes to a space. A name
/// repeated in the query string keeps its last value.
pub fn parse_query_params(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
