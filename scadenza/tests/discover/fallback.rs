use crate::helpers::{SPY, cand, instrument, req};
use scadenza::{Discovery, MissReason, Scadenza};
use scadenza_mock::{DynamicMockExpirations, MockBehavior};

#[tokio::test]
async fn fallback_request_rescues_a_short_calendar() {
    // Only a single short-dated expiration is listed; the monthly request
    // misses and the caller's 7±3 fallback lands on it.
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![cand(8, 30)]))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte_with_fallback(&instrument(SPY), &req(32, 5), &req(7, 3))
        .await;
    assert_eq!(out.found().unwrap().selected_dte(), 8);
    assert_eq!(ctrl.requests().await.len(), 2);
}

#[tokio::test]
async fn primary_hit_skips_the_fallback_read() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![cand(31, 500), cand(8, 30)]))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte_with_fallback(&instrument(SPY), &req(32, 5), &req(7, 3))
        .await;
    assert_eq!(out.found().unwrap().selected_dte(), 31);
    assert_eq!(ctrl.requests().await.len(), 1);
}

#[tokio::test]
async fn fallback_never_widens_the_primary_window() {
    // 40 DTE sits outside both the primary 27..=37 window and the fallback
    // 4..=10 window; it must never be selected, however liquid.
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![cand(40, 50_000)]))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte_with_fallback(&instrument(SPY), &req(32, 5), &req(7, 3))
        .await;
    match out {
        Discovery::NotFound(miss) => {
            assert_eq!(miss.target_dte, 32);
            assert_eq!(miss.tolerance, 5);
            assert_eq!(miss.reason, MissReason::NoneInWindow);
        }
        Discovery::Found(r) => panic!("selected {} outside every window", r.selected_dte()),
    }
}

#[tokio::test]
async fn double_miss_reports_the_primary_request() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![])).await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte_with_fallback(&instrument(SPY), &req(32, 5), &req(7, 3))
        .await;
    // The caller's nominal-target last resort uses the primary target.
    assert_eq!(out.dte_or_target(), 32);
}
