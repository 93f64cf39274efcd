//! Response classification for asynchronous HTTP calls.
//!
//! # Overview
//! Wraps a transport `Call` so that every completion, whether a decoded
//! success payload, an application error payload, a connectivity failure or
//! anything else, reaches the caller as exactly one [`Outcome`]. Callers never
//! look at raw status codes and never handle transport errors directly.
//!
//! # Design
//! - The transport and the serialization layer stay outside this crate; they
//!   are reached through the [`Call`], [`Callback`] and [`ErrorBodyDecoder`]
//!   traits.
//! - [`OutcomeCall`] decorates a delegate call by composition and reports
//!   every outcome through `Callback::on_response`, so errors travel as values.
//! - [`OutcomeAdapter`] shares one decoder and one [`CallConfig`] across all
//!   the calls it wraps.
//! - `Outcome` is a closed enum; consumers match on it exhaustively.

pub mod adapter;
pub mod call;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod outcome;
pub mod outcome_call;

#[cfg(test)]
mod fake;

pub use adapter::OutcomeAdapter;
pub use call::{Call, Callback};
pub use config::CallConfig;
pub use decode::{ErrorBodyDecoder, JsonErrorDecoder};
pub use error::{BoxError, CallError, ConfigError, DecodeError, TransportError};
pub use http::{ErrorBody, HttpMethod, HttpRequest, Response};
pub use outcome::{Handlers, Outcome, OutcomeKind};
pub use outcome_call::OutcomeCall;
