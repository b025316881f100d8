use async_trait::async_trait;

use paft::domain::{AssetKind, Instrument};
use scadenza_types::{ExpirationCandidate, ScadenzaError};

/// Capability trait implemented by market-data sources that can list option
/// expirations for an instrument.
///
/// The discoverer stays oblivious to deployment environment: whether the
/// listing comes from a production endpoint, a sandbox, a cache, or a test
/// fixture is entirely this trait's concern. Timeouts and retries, if any,
/// also live behind this boundary and surface to callers only as errors.
#[async_trait]
pub trait ExpirationsProvider: Send + Sync {
    /// A stable identifier used in logs and provider-tagged errors.
    fn name(&self) -> &'static str;

    /// Whether this provider *claims* to support a given asset kind.
    ///
    /// Default: returns `false` for all kinds. Providers must explicitly
    /// override this method to declare which asset kinds they cover.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        let _ = kind;
        false
    }

    /// List the currently available expirations for the instrument.
    ///
    /// Candidates carry day counts computed relative to the provider's
    /// current date; past expirations are excluded. The list may be empty on
    /// thin calendars, and the call may fail when the feed is unavailable.
    async fn available_expirations(
        &self,
        instrument: &Instrument,
    ) -> Result<Vec<ExpirationCandidate>, ScadenzaError>;
}
