use crate::helpers::cand;
use rust_decimal::Decimal;
use scadenza::{RiskLevel, RiskTolerance, Scadenza};
use scadenza_mock::{DynamicMockExpirations, MockBehavior};

async fn scadenza_with_defaults() -> Scadenza {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior("SPY", MockBehavior::Return(vec![cand(7, 300)]))
        .await;
    Scadenza::builder().with_provider(mock).build().unwrap()
}

#[tokio::test]
async fn account_recommendation_uses_the_configured_policy() {
    let scadenza = scadenza_with_defaults().await;
    assert_eq!(
        scadenza.recommended_for_account(Decimal::from(10_000), RiskTolerance::Medium),
        Some(7)
    );
}

#[tokio::test]
async fn risk_multiplier_and_data_config_read_the_policy() {
    let scadenza = scadenza_with_defaults().await;
    assert_eq!(scadenza.risk_multiplier(10), 3.0);
    assert_eq!(scadenza.data_config(10).period, "2mo");
}

#[tokio::test]
async fn assessment_flags_oversized_same_day_positions() {
    let scadenza = scadenza_with_defaults().await;
    let out = scadenza.assess_for_account(0, Decimal::from(10_000), Decimal::from(800));
    assert!(!out.is_valid);
    assert_eq!(out.risk_level, RiskLevel::VeryHigh);
}
