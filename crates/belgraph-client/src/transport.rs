//! Transport for stored server-side query functions.
//!
//! The server exposes each query as
//! `GET {server}/function/{db}/{function}/{arg1}/{arg2}/…` behind basic
//! authentication, answering `{"result": [ … ]}`. [`QueryBackend`] is the
//! seam: production code uses [`HttpBackend`], tests inject [`MockBackend`].

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use tracing::debug;

use crate::config::ConnectConfig;
use crate::error::ClientError;

// ─────────────────────────────────────────────
// ApiArg
// ─────────────────────────────────────────────

/// One positional argument to a stored function, rendered into the URL path.
#[derive(Debug, Clone)]
pub enum ApiArg {
    Text(String),
    Int(i64),
}

impl fmt::Display for ApiArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiArg::Text(s) => write!(f, "{s}"),
            ApiArg::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ApiArg {
    fn from(s: &str) -> Self {
        ApiArg::Text(s.to_string())
    }
}

impl From<String> for ApiArg {
    fn from(s: String) -> Self {
        ApiArg::Text(s)
    }
}

impl From<i64> for ApiArg {
    fn from(n: i64) -> Self {
        ApiArg::Int(n)
    }
}

// ─────────────────────────────────────────────
// QueryBackend trait
// ─────────────────────────────────────────────

/// Abstraction over the remote query collaborator.
///
/// Implementations return the fully-materialized result records from the
/// response envelope; they perform no retry and no caching. A failed or
/// slow call propagates to the caller as is.
pub trait QueryBackend {
    /// Invoke a stored function with positional arguments.
    fn call(&self, function: &str, args: &[ApiArg]) -> Result<Vec<Value>, ClientError>;
}

// ─────────────────────────────────────────────
// HttpBackend
// ─────────────────────────────────────────────

/// Path-segment escaping: controls plus every character that would alter
/// URL structure if it appeared inside an argument.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Blocking HTTP backend with basic authentication.
///
/// Each call performs exactly one round-trip; the connection pool inside
/// [`reqwest::blocking::Client`] is reused across calls.
pub struct HttpBackend {
    config: ConnectConfig,
    http: reqwest::blocking::Client,
}

impl HttpBackend {
    pub fn new(config: ConnectConfig) -> Self {
        Self {
            config,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// `{server}/function/{db}/{function}/{arg1}/{arg2}/…` with every
    /// argument percent-encoded as its own path segment.
    fn function_url(&self, function: &str, args: &[ApiArg]) -> String {
        let mut url = format!(
            "{}/function/{}/{}",
            self.config.server.trim_end_matches('/'),
            self.config.db_name,
            function
        );
        for arg in args {
            url.push('/');
            url.push_str(&utf8_percent_encode(&arg.to_string(), PATH_SEGMENT).to_string());
        }
        url
    }
}

impl QueryBackend for HttpBackend {
    fn call(&self, function: &str, args: &[ApiArg]) -> Result<Vec<Value>, ClientError> {
        let url = self.function_url(function, args);
        debug!(url = %url, "calling stored function");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                function: function.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json()?;
        match body.get("result") {
            Some(Value::Array(records)) => Ok(records.clone()),
            _ => Err(ClientError::MalformedResponse(
                "missing 'result' array in response envelope".to_string(),
            )),
        }
    }
}

// ─────────────────────────────────────────────
// MockBackend  (tests / offline development)
// ─────────────────────────────────────────────

/// In-memory backend used in tests and offline development.
///
/// Serves canned result records per function name and counts calls, so
/// tests can assert that cached paths skip the network entirely.
#[derive(Debug, Default)]
pub struct MockBackend {
    responses: HashMap<String, Vec<Value>>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the canned result records for `function`.
    pub fn with_result(mut self, function: &str, records: Vec<Value>) -> Self {
        self.responses.insert(function.to_string(), records);
        self
    }

    /// Number of calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl QueryBackend for MockBackend {
    fn call(&self, function: &str, _args: &[ApiArg]) -> Result<Vec<Value>, ClientError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.responses
            .get(function)
            .cloned()
            .ok_or_else(|| ClientError::Api {
                function: function.to_string(),
                status: 404,
            })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
