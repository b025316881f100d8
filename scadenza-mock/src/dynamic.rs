use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use paft::domain::{AssetKind, Instrument};
use scadenza_core::ExpirationsProvider;
use scadenza_core::{ExpirationCandidate, ScadenzaError};

/// Instruction for how an expirations call should behave for a given symbol.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided candidates immediately.
    Return(Vec<ExpirationCandidate>),
    /// Fail immediately with a provider error carrying this message.
    Fail(String),
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    request_log: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for expirations calls for a specific symbol.
    pub async fn set_behavior(&self, symbol: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(symbol.into(), behavior);
    }

    /// Return the symbols requested so far, in call order.
    pub async fn requests(&self) -> Vec<String> {
        let guard = self.state.lock().await;
        guard.request_log.clone()
    }

    /// Clear configured behaviors and the request log.
    pub async fn clear(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.request_log.clear();
    }
}

/// A provider that defers all behavior to an external controller.
pub struct DynamicMockExpirations {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockExpirations {
    /// Create a new dynamic mock provider and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn ExpirationsProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn ExpirationsProvider>, controller)
    }
}

#[async_trait]
impl ExpirationsProvider for DynamicMockExpirations {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_kind(&self, _kind: AssetKind) -> bool {
        true
    }

    async fn available_expirations(
        &self,
        instrument: &Instrument,
    ) -> Result<Vec<ExpirationCandidate>, ScadenzaError> {
        let symbol = instrument.symbol_str().to_string();
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.request_log.push(symbol.clone());
            guard.rules.get(&symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(candidates)) => Ok(candidates),
            Some(MockBehavior::Fail(msg)) => Err(ScadenzaError::provider(self.name, msg)),
            None => Err(ScadenzaError::unsupported("expirations")),
        }
    }
}
