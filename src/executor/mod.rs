//! Request executor abstraction.
//!
//! Implement [RequestExecutor] to plug in the host's HTTP client. It owns
//! authentication, transport, retries and JSON decoding; this crate only
//! builds URLs, validates identifiers and walks pages.

mod replay;

pub use replay::ReplayExecutor;

use crate::types::Envelope;
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request. `url` is absolute; `body` is sent as JSON when set.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn put(url: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::Put,
            url: url.into(),
            body,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }
}

/// Async trait for the host's "send request" capability.
///
/// Errors returned here reach the caller unchanged. Non-2xx responses should
/// be returned as an [Envelope] rather than an error if the host wants callers
/// to inspect `code` themselves.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn send_request(&self, request: Request) -> Result<Envelope>;
}

/// Shared executor handle held by the client.
pub type Executor = Arc<dyn RequestExecutor>;
