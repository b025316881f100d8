#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Days, NaiveDate};

use scadenza::{
    AssetKind, DiscoveryRequest, ExpirationCandidate, ExpirationsProvider, Instrument,
    ScadenzaError,
};

/// Common symbol constants used across tests.
pub const SPY: &str = "SPY";
pub const AAPL: &str = "AAPL";

/// Construct an `Instrument` for test usage with infallible expectations.
pub fn instrument(symbol: &str) -> Instrument {
    Instrument::from_symbol(symbol, AssetKind::Equity).expect("valid static test symbol")
}

/// Fixed anchor date so day counts stay deterministic (a Monday).
pub fn day0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

/// Build a candidate `dte` days past the anchor with the given contract count.
pub fn cand(dte: i64, count: u64) -> ExpirationCandidate {
    ExpirationCandidate {
        expiration: day0() + Days::new(u64::try_from(dte).unwrap()),
        days_to_expiration: dte,
        option_count: count,
    }
}

/// Build a request with infallible expectations.
pub fn req(target: i64, tolerance: i64) -> DiscoveryRequest {
    DiscoveryRequest::new(target, tolerance).expect("valid static test request")
}

/// A provider that keeps the trait's default kind coverage (none) while
/// claiming to have data; exercises the supports-kind gate.
pub struct NoKindsProvider;

#[async_trait]
impl ExpirationsProvider for NoKindsProvider {
    fn name(&self) -> &'static str {
        "no-kinds"
    }

    async fn available_expirations(
        &self,
        _instrument: &Instrument,
    ) -> Result<Vec<ExpirationCandidate>, ScadenzaError> {
        Ok(vec![cand(32, 10)])
    }
}
