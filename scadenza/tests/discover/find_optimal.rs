use crate::helpers::{SPY, cand, instrument, req};
use scadenza::Scadenza;
use scadenza_mock::{DynamicMockExpirations, MockBehavior, MockExpirations};
use std::sync::Arc;

#[tokio::test]
async fn selects_the_closest_in_window_expiration() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(
        SPY,
        MockBehavior::Return(vec![cand(31, 1247), cand(33, 40), cand(35, 20)]),
    )
    .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte(&instrument(SPY), &req(32, 5))
        .await;
    let result = out.found().expect("a candidate inside 27..=37");
    assert_eq!(result.selected_dte(), 31);
    assert_eq!(result.distance_from_target, 1);
    assert_eq!(result.option_count(), 1247);
    let alt_dtes: Vec<i64> = result
        .alternatives
        .iter()
        .map(|c| c.days_to_expiration)
        .collect();
    assert_eq!(alt_dtes, vec![33, 35]);
}

#[tokio::test]
async fn exact_match_outranks_liquidity() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![cand(32, 5), cand(33, 9_000)]))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte(&instrument(SPY), &req(32, 3))
        .await;
    assert_eq!(out.found().unwrap().selected_dte(), 32);
    assert_eq!(out.dte_or_target(), 32);
}

#[tokio::test]
async fn fixture_ladder_serves_a_monthly_target() {
    // Anchored on a Monday, the weekly ladder includes a 32-day Friday.
    let mock = Arc::new(MockExpirations::anchored(crate::helpers::day0()));
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte(&instrument(SPY), &req(32, 5))
        .await;
    let result = out.found().expect("ladder covers the window");
    assert_eq!(result.selected_dte(), 32);
    assert_eq!(result.distance_from_target, 0);
}

#[tokio::test]
async fn discovery_performs_exactly_one_upstream_read() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![cand(30, 100)]))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte(&instrument(SPY), &req(32, 5))
        .await;
    assert!(out.is_found());
    assert_eq!(ctrl.requests().await.len(), 1);
}
