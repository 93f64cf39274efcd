//! The asynchronous call abstraction every transport implements.
//!
//! # Design
//! A `Call` is one HTTP exchange that can be submitted once. Completion is
//! reported through a `Callback` with two signals: `on_response` when an HTTP
//! response arrived (whatever its status) and `on_failure` when the transport
//! failed before producing one. Both signals take `self: Box<Self>`, so a
//! callback is consumed by the first signal and can never fire twice.
//!
//! The transport owns all concurrency. `enqueue` returns as soon as the call
//! has been handed over; the callback runs later on whatever thread the
//! transport completes on, hence the `Send + 'static` bounds.

use std::time::Duration;

use crate::error::{CallError, TransportError};
use crate::http::{HttpRequest, Response};

/// Receiver of exactly one completion signal for an enqueued call.
pub trait Callback<T>: Send + 'static {
    /// An HTTP response was received. It may still carry a 4xx/5xx status.
    fn on_response(self: Box<Self>, response: Response<T>);

    /// The transport failed before a response was obtained, or an unexpected
    /// error occurred creating the request or processing the response.
    fn on_failure(self: Box<Self>, error: TransportError);
}

impl<T, Func> Callback<T> for Func
where
    Func: FnOnce(Result<Response<T>, TransportError>) + Send + 'static,
{
    fn on_response(self: Box<Self>, response: Response<T>) {
        (*self)(Ok(response))
    }

    fn on_failure(self: Box<Self>, error: TransportError) {
        (*self)(Err(error))
    }
}

/// A single HTTP exchange, submitted at most once.
pub trait Call: Send {
    /// Decoded success payload.
    type Body: Send + 'static;

    /// Submit the call for asynchronous execution.
    ///
    /// On `Ok(())` the callback receives exactly one signal. On `Err` the call
    /// was never submitted and the callback is dropped without firing.
    fn enqueue(&self, callback: Box<dyn Callback<Self::Body>>) -> Result<(), CallError>;

    /// Send the request on the current thread and wait for its response.
    fn execute(&self) -> Result<Response<Self::Body>, CallError>;

    /// Timeout spanning the whole call: DNS, connect, write, server
    /// processing and read.
    fn timeout(&self) -> Duration;

    /// A fresh, unexecuted call identical to this one.
    fn clone_call(&self) -> Self
    where
        Self: Sized;

    /// Best-effort cancellation. A call in flight may still complete.
    fn cancel(&self);

    /// True once `cancel` has been called on this call.
    fn is_cancelled(&self) -> bool;

    /// True once the call has been enqueued or executed.
    fn is_executed(&self) -> bool;

    /// The original HTTP request.
    fn request(&self) -> &HttpRequest;
}
