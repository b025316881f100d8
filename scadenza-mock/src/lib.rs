use async_trait::async_trait;
use chrono::NaiveDate;

use paft::domain::{AssetKind, Instrument};
use scadenza_core::ExpirationsProvider;
use scadenza_core::{ExpirationCandidate, ScadenzaError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockExpirations, MockBehavior};

/// Mock provider for CI-safe examples and tests. Serves a deterministic
/// expiration ladder anchored at a caller-supplied "today".
pub struct MockExpirations {
    today: NaiveDate,
}

impl MockExpirations {
    /// Create a mock whose day counts are computed relative to `today`.
    #[must_use]
    pub const fn anchored(today: NaiveDate) -> Self {
        Self { today }
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), ScadenzaError> {
        if symbol == "FAIL" {
            return Err(ScadenzaError::provider(
                "scadenza-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ExpirationsProvider for MockExpirations {
    fn name(&self) -> &'static str {
        "scadenza-mock"
    }

    fn supports_kind(&self, _kind: AssetKind) -> bool {
        true
    }

    async fn available_expirations(
        &self,
        instrument: &Instrument,
    ) -> Result<Vec<ExpirationCandidate>, ScadenzaError> {
        let s = instrument.symbol_str();
        Self::maybe_fail(s, "expirations")?;
        if s == "EMPTY" {
            return Ok(vec![]);
        }
        Ok(fixtures::calendar::ladder(self.today))
    }
}
