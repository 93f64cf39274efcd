//! Factory that wraps transport calls into [`OutcomeCall`]s.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::call::Call;
use crate::config::CallConfig;
use crate::decode::{ErrorBodyDecoder, JsonErrorDecoder};
use crate::outcome_call::OutcomeCall;

/// Holds the error-body decoder and configuration shared by every call it
/// adapts.
pub struct OutcomeAdapter<F> {
    decoder: Arc<dyn ErrorBodyDecoder<F>>,
    config: CallConfig,
}

impl<F: Send + 'static> OutcomeAdapter<F> {
    pub fn new(decoder: impl ErrorBodyDecoder<F> + 'static) -> Self {
        Self::with_config(decoder, CallConfig::default())
    }

    pub fn with_config(decoder: impl ErrorBodyDecoder<F> + 'static, config: CallConfig) -> Self {
        Self::from_shared(Arc::new(decoder), config)
    }

    pub fn from_shared(decoder: Arc<dyn ErrorBodyDecoder<F>>, config: CallConfig) -> Self {
        Self { decoder, config }
    }

    pub fn adapt<C: Call>(&self, call: C) -> OutcomeCall<C, F> {
        OutcomeCall::with_config(call, Arc::clone(&self.decoder), self.config.clone())
    }

    pub fn decoder(&self) -> &Arc<dyn ErrorBodyDecoder<F>> {
        &self.decoder
    }

    pub fn config(&self) -> &CallConfig {
        &self.config
    }
}

impl<F: DeserializeOwned + Send + 'static> OutcomeAdapter<F> {
    /// An adapter decoding error bodies as JSON.
    pub fn json() -> Self {
        Self::new(JsonErrorDecoder::new())
    }
}

impl<F> Clone for OutcomeAdapter<F> {
    fn clone(&self) -> Self {
        Self {
            decoder: Arc::clone(&self.decoder),
            config: self.config.clone(),
        }
    }
}
