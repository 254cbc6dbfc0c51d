use super::{RawResponse, Request, Transport, Verb};
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use url::Url;

/// Records requests and answers them from a queue. An empty queue answers `200` with no body.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    requests: Mutex<Vec<Request>>,
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
}

impl MockTransport {
    pub fn respond_with(&self, status: u16, body: &'static str) -> &Self {
        let status = StatusCode::from_u16(status).unwrap();

        self.responses.lock().unwrap().push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail_with(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn answer(&self, verb: Verb, url: &Url, body: Option<&Value>) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(Request {
            verb,
            url: url.clone(),
            body: body.cloned(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(StatusCode::OK, "")))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        self.answer(Verb::Get, url, None)
    }

    async fn post(&self, url: &Url, body: &Value) -> Result<RawResponse, TransportError> {
        self.answer(Verb::Post, url, Some(body))
    }

    async fn delete(&self, url: &Url, body: Option<&Value>) -> Result<RawResponse, TransportError> {
        self.answer(Verb::Delete, url, body)
    }
}
