use std::collections::BTreeSet;

use paft::domain::Instrument;
use rust_decimal::Decimal;

use scadenza_core::policy;
use scadenza_types::{DteAssessment, DteDataConfig, MarketTrend, RiskTolerance};

use crate::Scadenza;

impl Scadenza {
    /// Offered DTE selections under the configured policy, optionally capped
    /// at `max_dte`.
    #[must_use]
    pub fn configured_dtes(&self, max_dte: Option<i64>) -> Vec<i64> {
        policy::configured_dtes(&self.policy, max_dte)
    }

    /// DTEs that are both configured and currently listed for `instrument`.
    ///
    /// Live discovery narrows the configured offering to what the market
    /// actually lists; it never blocks it. When the feed is unavailable, or
    /// the intersection comes up empty, the configured list is returned
    /// unchanged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "scadenza::policy",
            skip(self),
            fields(symbol = %instrument.symbol()),
        )
    )]
    pub async fn discovered_dtes(&self, instrument: &Instrument, max_dte: Option<i64>) -> Vec<i64> {
        let configured = self.configured_dtes(max_dte);
        match self.list_candidates(instrument).await {
            Ok(candidates) => {
                let listed: BTreeSet<i64> =
                    candidates.iter().map(|c| c.days_to_expiration).collect();
                let narrowed: Vec<i64> = configured
                    .iter()
                    .copied()
                    .filter(|dte| listed.contains(dte))
                    .collect();
                if narrowed.is_empty() {
                    configured
                } else {
                    narrowed
                }
            }
            Err(_) => configured,
        }
    }

    /// Whether `dte` is currently tradeable for `instrument` under the
    /// configured policy.
    pub async fn is_valid_dte(&self, instrument: &Instrument, dte: i64) -> bool {
        self.discovered_dtes(instrument, None).await.contains(&dte)
    }

    /// Recommended DTE for an account size and risk appetite.
    #[must_use]
    pub fn recommended_for_account(
        &self,
        account_value: Decimal,
        risk: RiskTolerance,
    ) -> Option<i64> {
        policy::recommended_for_account(&self.policy, account_value, risk)
    }

    /// Recommended DTE for current market conditions.
    #[must_use]
    pub fn recommended_for_market(
        &self,
        volatility: Option<f64>,
        trend: MarketTrend,
    ) -> Option<i64> {
        policy::recommended_for_market(&self.policy, volatility, trend)
    }

    /// Position-sizing multiplier for `dte`.
    #[must_use]
    pub fn risk_multiplier(&self, dte: i64) -> f64 {
        policy::risk_multiplier(&self.policy, dte)
    }

    /// Market-data window for `dte`.
    #[must_use]
    pub fn data_config(&self, dte: i64) -> DteDataConfig {
        policy::data_config(&self.policy, dte)
    }

    /// Assess whether `dte` suits an account and position size.
    #[must_use]
    pub fn assess_for_account(
        &self,
        dte: i64,
        account_value: Decimal,
        position_size: Decimal,
    ) -> DteAssessment {
        policy::assess_for_account(dte, account_value, position_size)
    }
}
