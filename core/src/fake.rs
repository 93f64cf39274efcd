//! In-process transport used by the unit tests.
//!
//! `FakeCall` completes on a freshly spawned thread, like a real transport
//! completing on its own worker pool, with whatever `complete` produces.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::call::{Call, Callback};
use crate::error::{CallError, TransportError};
use crate::http::{HttpRequest, Response};

type Completion<T> = Arc<dyn Fn() -> Result<Response<T>, TransportError> + Send + Sync>;

pub(crate) struct FakeCall<T> {
    request: HttpRequest,
    complete: Completion<T>,
    executed: AtomicBool,
    cancelled: Arc<AtomicBool>,
    pub(crate) enqueues: Arc<AtomicUsize>,
}

impl<T: Send + 'static> FakeCall<T> {
    pub(crate) fn new(
        complete: impl Fn() -> Result<Response<T>, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            request: HttpRequest::get("http://fake.local/users/1"),
            complete: Arc::new(complete),
            executed: AtomicBool::new(false),
            cancelled: Arc::new(AtomicBool::new(false)),
            enqueues: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn responding(response: impl Fn() -> Response<T> + Send + Sync + 'static) -> Self {
        Self::new(move || Ok(response()))
    }

    pub(crate) fn failing(error: impl Fn() -> TransportError + Send + Sync + 'static) -> Self {
        Self::new(move || Err(error()))
    }
}

impl<T: Send + 'static> Call for FakeCall<T> {
    type Body = T;

    fn enqueue(&self, callback: Box<dyn Callback<T>>) -> Result<(), CallError> {
        if self.executed.swap(true, Ordering::SeqCst) {
            return Err(CallError::AlreadyExecuted);
        }
        self.enqueues.fetch_add(1, Ordering::SeqCst);
        let complete = Arc::clone(&self.complete);
        let cancelled = Arc::clone(&self.cancelled);
        thread::spawn(move || {
            if cancelled.load(Ordering::SeqCst) {
                callback.on_failure(TransportError::Io(std::io::Error::new(
                    std::io::ErrorKind::Interrupted,
                    "Canceled",
                )));
                return;
            }
            match complete() {
                Ok(response) => callback.on_response(response),
                Err(error) => callback.on_failure(error),
            }
        });
        Ok(())
    }

    fn execute(&self) -> Result<Response<T>, CallError> {
        if self.executed.swap(true, Ordering::SeqCst) {
            return Err(CallError::AlreadyExecuted);
        }
        Ok((self.complete)()?)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(10)
    }

    fn clone_call(&self) -> Self {
        Self {
            request: self.request.clone(),
            complete: Arc::clone(&self.complete),
            executed: AtomicBool::new(false),
            cancelled: Arc::new(AtomicBool::new(false)),
            enqueues: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn is_executed(&self) -> bool {
        self.executed.load(Ordering::SeqCst)
    }

    fn request(&self) -> &HttpRequest {
        &self.request
    }
}
