use crate::helpers::{NoKindsProvider, SPY, cand, instrument, req};
use scadenza::{Discovery, MissReason, Scadenza};
use scadenza_mock::{DynamicMockExpirations, MockBehavior, MockExpirations};
use std::sync::Arc;

fn miss_reason(out: Discovery) -> MissReason {
    match out {
        Discovery::NotFound(miss) => miss.reason,
        Discovery::Found(r) => panic!("unexpected selection: {} DTE", r.selected_dte()),
    }
}

#[tokio::test]
async fn upstream_failure_folds_into_not_found() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Fail("connection reset".to_string()))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let reason = miss_reason(
        scadenza
            .find_optimal_dte(&instrument(SPY), &req(32, 5))
            .await,
    );
    match reason {
        MissReason::Upstream(msg) => {
            assert!(msg.contains("dyn"));
            assert!(msg.contains("connection reset"));
        }
        other => panic!("expected an upstream miss, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_calendar_is_its_own_reason() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![])).await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let reason = miss_reason(
        scadenza
            .find_optimal_dte(&instrument(SPY), &req(32, 5))
            .await,
    );
    assert_eq!(reason, MissReason::EmptyCalendar);
}

#[tokio::test]
async fn out_of_window_calendar_reports_none_in_window() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Return(vec![cand(2, 900), cand(60, 900)]))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let reason = miss_reason(
        scadenza
            .find_optimal_dte(&instrument(SPY), &req(32, 5))
            .await,
    );
    assert_eq!(reason, MissReason::NoneInWindow);
}

#[tokio::test]
async fn unsupported_asset_kind_is_an_upstream_miss() {
    let scadenza = Scadenza::builder()
        .with_provider(Arc::new(NoKindsProvider))
        .build()
        .unwrap();

    let reason = miss_reason(
        scadenza
            .find_optimal_dte(&instrument(SPY), &req(32, 5))
            .await,
    );
    assert!(matches!(reason, MissReason::Upstream(_)));
}

#[tokio::test]
async fn fixture_sentinels_degrade_gracefully() {
    let mock = Arc::new(MockExpirations::anchored(crate::helpers::day0()));
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let failed = scadenza
        .find_optimal_dte(&instrument("FAIL"), &req(32, 5))
        .await;
    assert!(matches!(
        miss_reason(failed),
        MissReason::Upstream(_)
    ));

    let empty = scadenza
        .find_optimal_dte(&instrument("EMPTY"), &req(32, 5))
        .await;
    assert_eq!(miss_reason(empty), MissReason::EmptyCalendar);
}

#[tokio::test]
async fn miss_preserves_the_requested_window() {
    let (mock, ctrl) = DynamicMockExpirations::new_with_controller("dyn");
    ctrl.set_behavior(SPY, MockBehavior::Fail("downstream timeout".to_string()))
        .await;
    let scadenza = Scadenza::builder().with_provider(mock).build().unwrap();

    let out = scadenza
        .find_optimal_dte(&instrument(SPY), &req(32, 5))
        .await;
    match out {
        Discovery::NotFound(miss) => {
            assert_eq!(miss.target_dte, 32);
            assert_eq!(miss.tolerance, 5);
        }
        Discovery::Found(_) => panic!("feed was down"),
    }
}
