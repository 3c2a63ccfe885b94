//! Error types for the API client.
//!
//! Every failure falls in one of four kinds so callers can tell a bad request
//! shape (never sent) from a network failure, a server rejection, or a
//! response that did not match the expected envelope.

use std::fmt;

use serde_json::Value;

use crate::codec::Codec;

/// Shorthand for results returned by the client.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be built: a path parameter or body is missing,
    /// or the client configuration is invalid. Nothing was sent.
    #[error("Invalid request: {0}")]
    Configuration(String),

    /// The request never produced an HTTP response (timeout, refused
    /// connection, DNS failure).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Server {
        status: u16,
        /// Message extracted from the error body, or the raw text.
        message: String,
        body: String,
    },

    /// A success response whose body did not match the expected shape.
    #[error("Failed to decode response with status {status}: {reason}")]
    Decode {
        status: u16,
        reason: String,
        body: String,
    },
}

impl Error {
    /// Builds a [`Error::Server`] from a non-success response body.
    ///
    /// The body is decoded with the client's codec. The message comes from
    /// its `message` field (a string or a list of validation messages), then
    /// `error`, and falls back to the raw text when the body does not decode.
    pub(crate) fn from_server_response(status: u16, body: &[u8], codec: &dyn Codec) -> Self {
        let text = String::from_utf8_lossy(body).into_owned();
        let message = codec
            .decode(body)
            .ok()
            .and_then(|value| server_message(&value))
            .unwrap_or_else(|| text.trim().to_string());

        Error::Server {
            status,
            message,
            body: text,
        }
    }

    pub(crate) fn decode(status: u16, reason: impl Into<String>, body: &[u8]) -> Self {
        Error::Decode {
            status,
            reason: reason.into(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Returns `true` for failures where repeating the call may succeed.
    ///
    /// Only transport failures qualify; the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// HTTP status of the response that caused this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404) && matches!(self, Error::Server { .. })
    }

    /// Raw response body attached to server and decode errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Server { body, .. } | Error::Decode { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

fn server_message(value: &Value) -> Option<String> {
    match value.get("message") {
        Some(Value::String(message)) => return Some(message.clone()),
        Some(Value::Array(messages)) => {
            let joined = messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        _ => {}
    }
    value.get("error").and_then(Value::as_str).map(String::from)
}

/// Broad category of a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportErrorKind::Timeout => "request timed out",
                TransportErrorKind::Connect => "connection failed",
                TransportErrorKind::Other => "request failed",
            }
        )
    }
}

/// A network-level failure reported by a [`Transport`](crate::Transport).
#[derive(thiserror::Error, Debug)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportErrorKind::Timeout
        } else if e.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        TransportError::new(kind, e.to_string())
    }
}
