use rust_decimal::Decimal;

use scadenza_types::{
    DteAssessment, DteDataConfig, DtePolicy, MarketTrend, RiskLevel, RiskTolerance,
};

/// Offered DTE selections clamped to a maximum, sorted ascending.
///
/// `max_dte` overrides the policy's own cap when supplied.
#[must_use]
pub fn configured_dtes(policy: &DtePolicy, max_dte: Option<i64>) -> Vec<i64> {
    let cap = max_dte.unwrap_or(policy.max_dte);
    let mut dtes: Vec<i64> = policy
        .available
        .iter()
        .copied()
        .filter(|dte| *dte <= cap)
        .collect();
    dtes.sort_unstable();
    dtes
}

/// Closest configured DTE to `dte`; ties resolve to the shorter date.
///
/// Returns `None` when the policy offers no DTEs at all.
#[must_use]
pub fn closest_available(policy: &DtePolicy, dte: i64) -> Option<i64> {
    policy
        .available
        .iter()
        .copied()
        .min_by_key(|available| ((available - dte).abs(), *available))
}

/// Recommended DTE for an account size and risk appetite.
///
/// Small accounts get longer dates to stay clear of pattern-day-trader
/// limits; the risk adjustment is applied before snapping to the closest
/// configured DTE. Returns `None` when the policy offers no DTEs.
#[must_use]
pub fn recommended_for_account(
    policy: &DtePolicy,
    account_value: Decimal,
    risk: RiskTolerance,
) -> Option<i64> {
    let base = if account_value < Decimal::from(5_000) {
        14
    } else if account_value < Decimal::from(25_000) {
        7
    } else {
        policy.default_dte
    };

    let adjusted = base
        + match risk {
            RiskTolerance::Low => 7,
            RiskTolerance::High => -3,
            _ => 0,
        };

    if policy.available.contains(&adjusted) {
        return Some(adjusted);
    }
    closest_available(policy, adjusted)
}

/// Recommended DTE for current market conditions.
///
/// High volatility and bear trends push the recommendation longer; calm or
/// rising markets allow shorter dates, floored at same-day. The result is
/// snapped to the closest configured DTE.
#[must_use]
pub fn recommended_for_market(
    policy: &DtePolicy,
    volatility: Option<f64>,
    trend: MarketTrend,
) -> Option<i64> {
    let mut dte = policy.default_dte;

    if let Some(vix) = volatility {
        if vix > 30.0 {
            dte += 3;
        } else if vix < 15.0 {
            dte = (dte - 2).max(0);
        }
    }

    match trend {
        MarketTrend::Bearish => dte += 2,
        MarketTrend::Bullish => dte = (dte - 1).max(0),
        _ => {}
    }

    if policy.available.contains(&dte) {
        return Some(dte);
    }
    closest_available(policy, dte)
}

/// Position-sizing multiplier for `dte`; 1.0 when unconfigured.
#[must_use]
pub fn risk_multiplier(policy: &DtePolicy, dte: i64) -> f64 {
    policy.risk_multipliers.get(&dte).copied().unwrap_or(1.0)
}

/// Market-data window for `dte`; the default same-day window when
/// unconfigured.
#[must_use]
pub fn data_config(policy: &DtePolicy, dte: i64) -> DteDataConfig {
    policy.data_configs.get(&dte).cloned().unwrap_or_default()
}

/// Assess whether `dte` suits an account and position size.
///
/// Position share is `position_size / account_value`; a zero or negative
/// account value counts as a 0% share. Only a `VeryHigh` classification
/// invalidates the combination.
#[must_use]
pub fn assess_for_account(
    dte: i64,
    account_value: Decimal,
    position_size: Decimal,
) -> DteAssessment {
    let position_pct = if account_value > Decimal::ZERO {
        position_size / account_value * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let mut out = DteAssessment::default();

    if dte == 0 {
        if account_value < Decimal::from(25_000) {
            out.warnings.push(
                "same-day trading with an account under $25k may trigger PDT restrictions"
                    .to_string(),
            );
            out.risk_level = RiskLevel::High;
        }
        if position_pct > Decimal::from(5) {
            out.warnings
                .push("same-day position over 5% of account is very risky".to_string());
            out.risk_level = RiskLevel::VeryHigh;
        }
    } else if dte <= 3 {
        if position_pct > Decimal::from(10) {
            out.warnings
                .push("short-dated position over 10% of account increases risk".to_string());
            out.risk_level = RiskLevel::High;
        }
    } else if dte >= 14 && position_pct < Decimal::from(2) {
        out.recommendations
            .push("consider a larger position size for a longer-dated expiration".to_string());
    }

    if account_value < Decimal::from(5_000) && dte < 7 {
        out.recommendations
            .push("consider an expiration at least 7 days out for smaller accounts".to_string());
    }

    out.is_valid = out.risk_level != RiskLevel::VeryHigh;
    out
}
