//! The HTTP layer underneath the client.
//!
//! [`Classifieds`](crate::Classifieds) owns an `Arc<dyn Transport>`. The default is
//! [`HttpTransport`]; any other implementation can be supplied through
//! [`ClassifiedsBuilder::transport`](crate::ClassifiedsBuilder::transport).

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use strum_macros::Display;
use url::Url;

/// The HTTP verbs used by the classifieds API.
#[derive(Display, Debug, PartialEq, Eq, Clone, Copy)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Delete,
}

/// Describes a single request. Query parameters, credentials included, are part of `url`.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub verb: Verb,
    pub url: Url,
    pub body: Option<Value>,
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends requests. Implementations return an error for non-2xx responses.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError>;

    async fn post(&self, url: &Url, body: &Value) -> Result<RawResponse, TransportError>;

    async fn delete(&self, url: &Url, body: Option<&Value>) -> Result<RawResponse, TransportError>;
}

/// Sends a [`Request`] with the matching verb.
pub(crate) async fn send(
    transport: &dyn Transport,
    request: &Request,
) -> Result<RawResponse, TransportError> {
    match request.verb {
        Verb::Get => transport.get(&request.url).await,
        Verb::Post => {
            let body = request.body.as_ref().unwrap_or(&Value::Null);

            transport.post(&request.url, body).await
        },
        Verb::Delete => transport.delete(&request.url, request.body.as_ref()).await,
    }
}
