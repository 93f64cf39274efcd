//! Error types shared by the transport seam and the call wrapper.
//!
//! # Design
//! Transport failures are split into `Io` and everything else because that is
//! the only distinction classification cares about: I/O errors mean no HTTP
//! response was obtained and become `Outcome::NetworkError`, all other
//! variants become `Outcome::UnknownError`.

use thiserror::Error;

/// A boxed, thread-safe error used for causes that have no concrete type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a transport through `Callback::on_failure`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connectivity-class failure: DNS, connect, reset, socket timeout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The response arrived but its success body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Body(#[source] DecodeError),

    /// Any other failure raised while creating the request or processing the
    /// response.
    #[error("{0}")]
    Other(BoxError),
}

impl TransportError {
    pub fn other(error: impl Into<BoxError>) -> Self {
        TransportError::Other(error.into())
    }
}

/// Failure to decode a payload into a typed value.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Custom(String),
}

/// Misuse of a `Call`, returned instead of a completion.
#[derive(Debug, Error)]
pub enum CallError {
    /// The call only supports asynchronous execution through `enqueue`.
    #[error("{0} doesn't support execute")]
    ExecuteUnsupported(&'static str),

    /// `enqueue` or `execute` was called on a call that already ran.
    #[error("call already executed")]
    AlreadyExecuted,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Invalid call configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}
