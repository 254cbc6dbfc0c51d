//! Verb helpers shared by every endpoint.
//!
//! Each helper produces a single [`Call`]. The outcome is delivered exactly once: to the
//! callback when one was supplied, otherwise as the output of the call.
//!
//! With a callback the request is spawned onto the current Tokio runtime immediately and the
//! returned call is already resolved to `None`. Without one the request is sent when the call
//! is first polled.

use super::Classifieds;
use crate::error::{Error, TransportError};
use crate::response::Payload;
use crate::transport::{self, RawResponse, Request, Verb};
use crate::types::{Call, CallResult, Callback};
use futures::future;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

impl Classifieds {
    pub(crate) fn do_get<T>(
        &self,
        url: Url,
        callback: Option<Callback<T>>,
    ) -> Call<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.dispatch(Request {
            verb: Verb::Get,
            url,
            body: None,
        }, callback)
    }

    pub(crate) fn do_post<T, B>(
        &self,
        url: Url,
        body: &B,
        callback: Option<Callback<T>>,
    ) -> Result<Call<T>, Error>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(Error::Serialize)?;

        Ok(self.dispatch(Request {
            verb: Verb::Post,
            url,
            body: Some(body),
        }, callback))
    }

    pub(crate) fn do_delete<T, B>(
        &self,
        url: Url,
        body: Option<&B>,
        callback: Option<Callback<T>>,
    ) -> Result<Call<T>, Error>
    where
        T: DeserializeOwned + Send + 'static,
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(Error::Serialize)?;

        Ok(self.dispatch(Request {
            verb: Verb::Delete,
            url,
            body,
        }, callback))
    }

    fn dispatch<T>(
        &self,
        request: Request,
        callback: Option<Callback<T>>,
    ) -> Call<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        let task = async move {
            // the query string carries credentials
            log::debug!("{} {}", request.verb, request.url.path());

            transport::send(transport.as_ref(), &request)
                .await
                .and_then(decode_payload::<T>)
        };

        match callback {
            Some(callback) => {
                // Runs whether or not the returned call is polled.
                tokio::spawn(async move {
                    callback(task.await);
                });

                Box::pin(future::ready(None))
            },
            None => Box::pin(async move {
                Some(task.await)
            }),
        }
    }
}

/// Decodes a response body. Empty and falsy bodies are replaced with the status code.
pub(crate) fn decode_payload<T>(response: RawResponse) -> CallResult<T>
where
    T: DeserializeOwned,
{
    let RawResponse { status, body } = response;

    if body.iter().all(u8::is_ascii_whitespace) {
        log::debug!("Empty response body, delivering status {status}");
        return Ok(Payload::Status(status));
    }

    let value: Value = serde_json::from_slice(&body)?;

    if is_falsy(&value) {
        log::debug!("Falsy response body, delivering status {status}");
        return Ok(Payload::Status(status));
    }

    serde_json::from_value(value)
        .map(Payload::Data)
        .map_err(TransportError::Parse)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(value) => value.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::MessageResponse;
    use reqwest::StatusCode;

    #[test]
    fn empty_body_becomes_status() {
        let response = RawResponse::new(StatusCode::NO_CONTENT, "");
        let payload = decode_payload::<MessageResponse>(response).unwrap();

        assert_eq!(payload, Payload::Status(StatusCode::NO_CONTENT));
    }

    #[test]
    fn falsy_bodies_become_status() {
        for body in ["null", "false", "0", "\"\"", "  \n"] {
            let response = RawResponse::new(StatusCode::OK, body);
            let payload = decode_payload::<MessageResponse>(response).unwrap();

            assert_eq!(payload.status(), Some(StatusCode::OK), "body {body:?}");
        }
    }

    #[test]
    fn decodes_body() {
        let response = RawResponse::new(StatusCode::OK, r#"{"message":"Listing deleted"}"#);
        let payload = decode_payload::<MessageResponse>(response).unwrap();

        assert_eq!(payload.data().and_then(|body| body.message.as_deref()), Some("Listing deleted"));
    }

    #[test]
    fn empty_object_is_data() {
        let response = RawResponse::new(StatusCode::OK, "{}");
        let payload = decode_payload::<MessageResponse>(response).unwrap();

        assert_eq!(payload, Payload::Data(MessageResponse::default()));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let response = RawResponse::new(StatusCode::OK, "<html>");
        let error = decode_payload::<MessageResponse>(response).unwrap_err();

        assert_eq!(error.name(), "ParseError");
    }
}
