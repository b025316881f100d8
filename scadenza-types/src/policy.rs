//! DTE policy configuration: which expirations a desk offers, and the risk
//! and market-data rules attached to each.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Trader risk appetite used when recommending a DTE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RiskTolerance {
    /// Add time for safety.
    Low,
    /// Use the base recommendation.
    #[default]
    Medium,
    /// Shorter DTE for more aggressive trading.
    High,
}

/// Broad market direction used when recommending a DTE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MarketTrend {
    /// Rising market; shorter dates are acceptable.
    Bullish,
    /// No directional read.
    #[default]
    Neutral,
    /// Falling market; prefer more time.
    Bearish,
}

/// Qualitative risk classification of a DTE/position combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RiskLevel {
    /// Comfortable sizing and timing.
    Low,
    /// Nothing unusual.
    #[default]
    Medium,
    /// Elevated; proceed with care.
    High,
    /// Unacceptable; the combination is rejected.
    VeryHigh,
}

/// Market-data window to analyze for a given DTE.
///
/// Shorter-dated trades look at finer bars over shorter lookbacks; the
/// period/interval codes follow the data feed's conventions (e.g. "1d"/"1m").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DteDataConfig {
    /// Lookback period for the price series.
    pub period: String,
    /// Bar interval within the period.
    pub interval: String,
    /// Longer lookback used for slower indicators.
    pub analysis_period: String,
    /// Number of most-recent bars the analysis consumes.
    pub data_points: u32,
}

impl Default for DteDataConfig {
    fn default() -> Self {
        Self {
            period: "1d".to_string(),
            interval: "1m".to_string(),
            analysis_period: "5d".to_string(),
            data_points: 30,
        }
    }
}

impl DteDataConfig {
    fn new(period: &str, interval: &str, analysis_period: &str, data_points: u32) -> Self {
        Self {
            period: period.to_string(),
            interval: interval.to_string(),
            analysis_period: analysis_period.to_string(),
            data_points,
        }
    }
}

/// Which DTEs a desk offers and the rules attached to each.
///
/// The default carries a short-dated retail configuration: same-day trading
/// by default, selections up to ten days out, risk multipliers that loosen
/// with time, and per-DTE market-data windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DtePolicy {
    /// DTE used when the caller expresses no preference.
    pub default_dte: i64,
    /// Largest DTE the desk offers.
    pub max_dte: i64,
    /// Offered DTE selections.
    pub available: Vec<i64>,
    /// Position-sizing multiplier per DTE; longer dates tolerate more risk.
    pub risk_multipliers: BTreeMap<i64, f64>,
    /// Market-data window per DTE.
    pub data_configs: BTreeMap<i64, DteDataConfig>,
}

impl Default for DtePolicy {
    fn default() -> Self {
        Self {
            default_dte: 0,
            max_dte: 10,
            available: vec![0, 1, 2, 3, 4, 5, 7, 8, 9, 10],
            risk_multipliers: BTreeMap::from([
                (0, 1.0),
                (1, 1.2),
                (2, 1.5),
                (3, 1.8),
                (5, 2.2),
                (7, 2.5),
                (10, 3.0),
            ]),
            data_configs: BTreeMap::from([
                (0, DteDataConfig::new("1d", "1m", "5d", 30)),
                (1, DteDataConfig::new("2d", "5m", "10d", 48)),
                (2, DteDataConfig::new("5d", "15m", "15d", 32)),
                (3, DteDataConfig::new("5d", "30m", "20d", 24)),
                (5, DteDataConfig::new("1mo", "1h", "30d", 24)),
                (7, DteDataConfig::new("1mo", "1h", "45d", 48)),
                (10, DteDataConfig::new("2mo", "1d", "60d", 10)),
            ]),
        }
    }
}

/// Assessment of a DTE/account/position combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DteAssessment {
    /// Whether the combination is acceptable at all.
    pub is_valid: bool,
    /// Overall risk classification.
    pub risk_level: RiskLevel,
    /// Conditions the trader should be aware of before proceeding.
    pub warnings: Vec<String>,
    /// Non-blocking sizing or timing suggestions.
    pub recommendations: Vec<String>,
}

impl Default for DteAssessment {
    fn default() -> Self {
        Self {
            is_valid: true,
            risk_level: RiskLevel::Medium,
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}
