//! Errors returned by the client.
//!
//! Local validation failures ([`Error::InvalidCredential`], [`Error::InvalidArgument`]) are
//! returned by the endpoint method itself before a request exists. Failures reported by the
//! transport are carried as a [`TransportError`] and are delivered through whichever channel
//! the caller picked: the callback, or the output of the returned [`Call`](crate::Call).

use reqwest::StatusCode;
use std::fmt;

/// The credential required by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// The user token, used by every endpoint except search.
    Token,
    /// The premium API key, used by search.
    ApiKey,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::ApiKey => write!(f, "API key"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("The backpack.tf {} is an invalid string or missing.", .0)]
    InvalidCredential(Credential),
    #[error("Invalid argument: {}", .0)]
    InvalidArgument(&'static str),
    #[error("Error building request URL: {}", .0)]
    Url(#[from] url::ParseError),
    #[error("Error serializing request body: {}", .0)]
    Serialize(serde_json::Error),
    #[error("{}", .0)]
    Transport(#[from] TransportError),
}

/// An error surfaced by the HTTP layer. These are passed through the client unmodified.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Error {}: {}", .status.as_u16(), .message)]
    Http {
        status: StatusCode,
        message: String,
    },
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
}

impl TransportError {
    /// A stable name for the kind of failure.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reqwest(_) => "RequestError",
            Self::ReqwestMiddleware(_) => "MiddlewareError",
            Self::Http { .. } => "HttpError",
            Self::Parse(_) => "ParseError",
        }
    }

    /// The HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Reqwest(error) => error.status(),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for TransportError {
    fn from(error: reqwest_middleware::Error) -> TransportError {
        match error {
            reqwest_middleware::Error::Reqwest(e) => TransportError::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => TransportError::ReqwestMiddleware(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_missing_credential() {
        let error = Error::InvalidCredential(Credential::ApiKey);

        assert_eq!(error.to_string(), "The backpack.tf API key is an invalid string or missing.");
    }

    #[test]
    fn http_error_exposes_name_and_status() {
        let error = TransportError::Http {
            status: StatusCode::NOT_IMPLEMENTED,
            message: "Not Implemented".into(),
        };

        assert_eq!(error.name(), "HttpError");
        assert_eq!(error.status(), Some(StatusCode::NOT_IMPLEMENTED));
        assert_eq!(error.to_string(), "Error 501: Not Implemented");
    }

    #[test]
    fn transport_error_message_is_preserved() {
        let error = Error::from(TransportError::Http {
            status: StatusCode::NOT_FOUND,
            message: "Listing not found".into(),
        });

        assert_eq!(error.to_string(), "Error 404: Listing not found");
    }
}
