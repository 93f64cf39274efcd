//! The closed result type produced for every completed call.

use std::fmt;
use std::io;

use crate::error::BoxError;

/// Result of one call attempt. Exactly one variant is produced per call.
#[derive(Debug)]
pub enum Outcome<D, F> {
    /// 2xx status with a decoded body.
    Ok { data: D, code: u16 },

    /// Non-2xx status whose error body decoded into `F`.
    ApiError { error: F, code: u16 },

    /// The transport failed with an I/O error before any response arrived.
    NetworkError { cause: Option<io::Error> },

    /// Anything that could not be classified more precisely: a 2xx with no
    /// body, a failure with a missing or undecodable error body, or a
    /// non-I/O transport failure (then `cause` is set).
    UnknownError { cause: Option<BoxError> },
}

/// Fieldless mirror of `Outcome`, handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Ok,
    ApiError,
    NetworkError,
    UnknownError,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutcomeKind::Ok => "ok",
            OutcomeKind::ApiError => "api_error",
            OutcomeKind::NetworkError => "network_error",
            OutcomeKind::UnknownError => "unknown_error",
        };
        f.write_str(name)
    }
}

impl<D, F> Outcome<D, F> {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Ok { .. } => OutcomeKind::Ok,
            Outcome::ApiError { .. } => OutcomeKind::ApiError,
            Outcome::NetworkError { .. } => OutcomeKind::NetworkError,
            Outcome::UnknownError { .. } => OutcomeKind::UnknownError,
        }
    }

    /// HTTP status, present only for `Ok` and `ApiError`.
    pub fn code(&self) -> Option<u16> {
        match self {
            Outcome::Ok { code, .. } | Outcome::ApiError { code, .. } => Some(*code),
            Outcome::NetworkError { .. } | Outcome::UnknownError { .. } => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }

    /// Splits off the success case, handing every other variant back intact.
    pub fn into_result(self) -> Result<(D, u16), Self> {
        match self {
            Outcome::Ok { data, code } => Ok((data, code)),
            other @ (Outcome::ApiError { .. }
            | Outcome::NetworkError { .. }
            | Outcome::UnknownError { .. }) => Err(other),
        }
    }

    /// Runs the handler registered for this variant and nothing else.
    ///
    /// ```
    /// use outcome_core::{Handlers, Outcome};
    ///
    /// let outcome: Outcome<u32, String> = Outcome::Ok { data: 7, code: 200 };
    /// let mut seen = None;
    /// outcome.handle(Handlers::new().on_ok(|data, code| seen = Some((data, code))));
    /// assert_eq!(seen, Some((7, 200)));
    /// ```
    pub fn handle(self, handlers: Handlers<'_, D, F>) {
        let Handlers {
            on_ok,
            on_api_error,
            on_network_error,
            on_unknown_error,
        } = handlers;
        match self {
            Outcome::Ok { data, code } => on_ok(data, code),
            Outcome::ApiError { error, code } => on_api_error(error, code),
            Outcome::NetworkError { cause } => on_network_error(cause),
            Outcome::UnknownError { cause } => on_unknown_error(cause),
        }
    }
}

/// One optional handler per `Outcome` variant; unset handlers do nothing.
pub struct Handlers<'a, D, F> {
    on_ok: Box<dyn FnOnce(D, u16) + 'a>,
    on_api_error: Box<dyn FnOnce(F, u16) + 'a>,
    on_network_error: Box<dyn FnOnce(Option<io::Error>) + 'a>,
    on_unknown_error: Box<dyn FnOnce(Option<BoxError>) + 'a>,
}

impl<'a, D, F> Handlers<'a, D, F> {
    pub fn new() -> Self {
        Self {
            on_ok: Box::new(|_, _| {}),
            on_api_error: Box::new(|_, _| {}),
            on_network_error: Box::new(|_| {}),
            on_unknown_error: Box::new(|_| {}),
        }
    }

    pub fn on_ok(mut self, f: impl FnOnce(D, u16) + 'a) -> Self {
        self.on_ok = Box::new(f);
        self
    }

    pub fn on_api_error(mut self, f: impl FnOnce(F, u16) + 'a) -> Self {
        self.on_api_error = Box::new(f);
        self
    }

    pub fn on_network_error(mut self, f: impl FnOnce(Option<io::Error>) + 'a) -> Self {
        self.on_network_error = Box::new(f);
        self
    }

    pub fn on_unknown_error(mut self, f: impl FnOnce(Option<BoxError>) + 'a) -> Self {
        self.on_unknown_error = Box::new(f);
        self
    }
}

impl<D, F> Default for Handlers<'_, D, F> {
    fn default() -> Self {
        Self::new()
    }
}
