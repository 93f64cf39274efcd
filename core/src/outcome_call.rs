//! Call wrapper that turns every completion into an [`Outcome`].
//!
//! # Design
//! `OutcomeCall` holds the delegate call by composition and forwards its
//! lifecycle (cancel, clone, executed/cancelled queries, request) untouched.
//! Only `enqueue` does real work: it hands the delegate a classifying
//! callback that maps the raw completion onto one `Outcome` and reports it
//! through `on_response`, even for failures. Callers therefore see a single
//! completion shape and handle errors by matching on the outcome.
//!
//! Classification runs synchronously on the transport's completion thread,
//! so it does no I/O. Nothing raised while decoding an error body reaches the
//! caller: decode errors and decoder panics both degrade to
//! `UnknownError { cause: None }`.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::call::{Call, Callback};
use crate::config::CallConfig;
use crate::decode::ErrorBodyDecoder;
use crate::error::{CallError, TransportError};
use crate::http::{HttpRequest, Response};
use crate::outcome::Outcome;

/// Asynchronous-only call yielding `Outcome<C::Body, F>`.
pub struct OutcomeCall<C, F> {
    delegate: C,
    decoder: Arc<dyn ErrorBodyDecoder<F>>,
    config: CallConfig,
}

impl<C, F> OutcomeCall<C, F>
where
    C: Call,
    F: Send + 'static,
{
    /// Wraps `delegate` with the default configuration.
    pub fn new(delegate: C, decoder: Arc<dyn ErrorBodyDecoder<F>>) -> Self {
        Self::with_config(delegate, decoder, CallConfig::default())
    }

    /// Wraps `delegate`, reporting the timeout from `config`.
    pub fn with_config(
        delegate: C,
        decoder: Arc<dyn ErrorBodyDecoder<F>>,
        config: CallConfig,
    ) -> Self {
        Self {
            delegate,
            decoder,
            config,
        }
    }

    /// The wrapped transport call.
    pub fn delegate(&self) -> &C {
        &self.delegate
    }

    /// The error-body decoder shared with clones of this call.
    pub fn decoder(&self) -> &Arc<dyn ErrorBodyDecoder<F>> {
        &self.decoder
    }
}

impl<C, F> Call for OutcomeCall<C, F>
where
    C: Call,
    F: Send + 'static,
{
    type Body = Outcome<C::Body, F>;

    fn enqueue(&self, callback: Box<dyn Callback<Self::Body>>) -> Result<(), CallError> {
        self.delegate.enqueue(Box::new(ClassifyingCallback {
            decoder: Arc::clone(&self.decoder),
            callback,
        }))
    }

    /// Always fails: this call only supports `enqueue`.
    fn execute(&self) -> Result<Response<Self::Body>, CallError> {
        Err(CallError::ExecuteUnsupported("OutcomeCall"))
    }

    /// The configured whole-call timeout, 30 seconds unless overridden. The
    /// delegate's own timeout is not consulted.
    fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    fn clone_call(&self) -> Self {
        Self {
            delegate: self.delegate.clone_call(),
            decoder: Arc::clone(&self.decoder),
            config: self.config.clone(),
        }
    }

    fn cancel(&self) {
        trace!(url = %self.delegate.request().url, "cancelling call");
        self.delegate.cancel()
    }

    fn is_cancelled(&self) -> bool {
        self.delegate.is_cancelled()
    }

    fn is_executed(&self) -> bool {
        self.delegate.is_executed()
    }

    fn request(&self) -> &HttpRequest {
        self.delegate.request()
    }
}

/// Callback handed to the delegate; forwards one classified outcome.
struct ClassifyingCallback<D, F> {
    decoder: Arc<dyn ErrorBodyDecoder<F>>,
    callback: Box<dyn Callback<Outcome<D, F>>>,
}

impl<D, F> Callback<D> for ClassifyingCallback<D, F>
where
    D: Send + 'static,
    F: Send + 'static,
{
    fn on_response(self: Box<Self>, response: Response<D>) {
        let outcome = classify_response(response, self.decoder.as_ref());
        self.callback.on_response(Response::success(outcome));
    }

    fn on_failure(self: Box<Self>, error: TransportError) {
        let outcome = classify_failure(error);
        self.callback.on_response(Response::success(outcome));
    }
}

/// Maps a received HTTP response onto an outcome.
pub(crate) fn classify_response<D, F>(
    response: Response<D>,
    decoder: &dyn ErrorBodyDecoder<F>,
) -> Outcome<D, F> {
    let code = response.status;
    let successful = response.is_successful();
    let Response {
        body, error_body, ..
    } = response;

    let outcome = if successful {
        match body {
            Some(data) => Outcome::Ok { data, code },
            None => Outcome::UnknownError { cause: None },
        }
    } else {
        match error_body {
            None => Outcome::UnknownError { cause: None },
            Some(error_body) if error_body.content_length() == 0 => {
                Outcome::UnknownError { cause: None }
            }
            Some(error_body) => match catch_unwind(AssertUnwindSafe(|| decoder.decode(&error_body))) {
                Ok(Ok(error)) => Outcome::ApiError { error, code },
                Ok(Err(err)) => {
                    debug!(status = code, error = %err, "discarding undecodable error body");
                    Outcome::UnknownError { cause: None }
                }
                Err(_) => {
                    debug!(status = code, "error body decoder panicked");
                    Outcome::UnknownError { cause: None }
                }
            },
        }
    };
    debug!(status = code, outcome = %outcome.kind(), "classified response");
    outcome
}

/// Maps a transport failure onto an outcome: I/O errors are network errors,
/// everything else is unknown.
pub(crate) fn classify_failure<D, F>(error: TransportError) -> Outcome<D, F> {
    let outcome = match error {
        TransportError::Io(cause) => Outcome::NetworkError { cause: Some(cause) },
        other @ (TransportError::Body(_) | TransportError::Other(_)) => Outcome::UnknownError {
            cause: Some(Box::new(other)),
        },
    };
    debug!(outcome = %outcome.kind(), "classified transport failure");
    outcome
}
