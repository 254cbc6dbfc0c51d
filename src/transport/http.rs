use super::{RawResponse, Transport};
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// A [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    /// Creates a transport using a default client with the given user agent.
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: get_default_middleware(user_agent),
        }
    }

    /// Creates a transport using an existing client.
    pub fn with_client(client: ClientWithMiddleware) -> Self {
        Self {
            client,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        send(self.client.get(url.as_str())).await
    }

    async fn post(&self, url: &Url, body: &Value) -> Result<RawResponse, TransportError> {
        send(self.client.post(url.as_str()).json(body)).await
    }

    async fn delete(&self, url: &Url, body: Option<&Value>) -> Result<RawResponse, TransportError> {
        let mut request = self.client.delete(url.as_str());

        if let Some(body) = body {
            request = request.json(body);
        }

        send(request).await
    }
}

/// Builds a client without retry middleware. Failed requests surface immediately.
pub fn get_default_middleware(user_agent: &str) -> ClientWithMiddleware {
    let mut headers = header::HeaderMap::new();

    if let Ok(user_agent) = header::HeaderValue::from_str(user_agent) {
        headers.insert(header::USER_AGENT, user_agent);
    }

    let client = reqwest::ClientBuilder::new()
        .default_headers(headers)
        .build()
        .unwrap_or_default();

    ClientBuilder::new(client).build()
}

async fn send(request: RequestBuilder) -> Result<RawResponse, TransportError> {
    let response = request.send().await?;

    check_response(response).await
}

async fn check_response(response: reqwest::Response) -> Result<RawResponse, TransportError> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(RawResponse::new(status, body));
    }

    let message = serde_json::from_slice::<ErrorBody>(&body)
        .map(|error| error.message)
        .unwrap_or_else(|_| {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        });

    log::warn!("Request failed with status {status}: {message}");

    Err(TransportError::Http {
        status,
        message,
    })
}
