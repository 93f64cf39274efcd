//! Error-body decoders.
//!
//! A decoder turns the raw payload of a non-2xx response into the caller's
//! typed `Failure`. It is shared between every call produced by one adapter,
//! so it must be stateless or internally synchronized.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::http::ErrorBody;

/// Converts a raw error payload into `F`.
pub trait ErrorBodyDecoder<F>: Send + Sync {
    fn decode(&self, body: &ErrorBody) -> Result<F, DecodeError>;
}

impl<F, Func> ErrorBodyDecoder<F> for Func
where
    Func: Fn(&ErrorBody) -> Result<F, DecodeError> + Send + Sync,
{
    fn decode(&self, body: &ErrorBody) -> Result<F, DecodeError> {
        self(body)
    }
}

/// Decodes error bodies as JSON with `serde_json`.
pub struct JsonErrorDecoder<F> {
    _failure: PhantomData<fn() -> F>,
}

impl<F> JsonErrorDecoder<F> {
    pub fn new() -> Self {
        Self {
            _failure: PhantomData,
        }
    }
}

impl<F> Default for JsonErrorDecoder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for JsonErrorDecoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonErrorDecoder")
            .field("failure", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F: DeserializeOwned> ErrorBodyDecoder<F> for JsonErrorDecoder<F> {
    fn decode(&self, body: &ErrorBody) -> Result<F, DecodeError> {
        Ok(serde_json::from_slice(&body.bytes)?)
    }
}
