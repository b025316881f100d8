use std::cmp::Reverse;

use scadenza_types::{DiscoveryRequest, DiscoveryResult, ExpirationCandidate};

/// Keep only candidates whose DTE lies inside the request's acceptance window.
#[must_use]
pub fn in_window(
    candidates: &[ExpirationCandidate],
    req: &DiscoveryRequest,
) -> Vec<ExpirationCandidate> {
    candidates
        .iter()
        .filter(|c| req.accepts(c.days_to_expiration))
        .cloned()
        .collect()
}

/// Sort candidates by the selection key, best first.
///
/// The key is `(|dte - target|, Reverse(option_count), expiration)`:
/// closeness to target wins, higher liquidity breaks distance ties, and the
/// earlier expiration date breaks exact ties. The ordering is total, so the
/// result does not depend on input order.
///
/// ```
/// use chrono::{Days, NaiveDate};
/// use scadenza_core::selection::rank;
/// use scadenza_types::ExpirationCandidate;
///
/// let day0 = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let mk = |dte: u64, count: u64| ExpirationCandidate {
///     expiration: day0 + Days::new(dte),
///     days_to_expiration: dte as i64,
///     option_count: count,
/// };
/// // 31 is closest to 32; 30 and 34 are both 2 away, so liquidity decides.
/// let ranked = rank(vec![mk(34, 150), mk(30, 20), mk(31, 5)], 32);
/// let dtes: Vec<i64> = ranked.iter().map(|c| c.days_to_expiration).collect();
/// assert_eq!(dtes, vec![31, 34, 30]);
/// ```
#[must_use]
pub fn rank(
    mut candidates: Vec<ExpirationCandidate>,
    target_dte: i64,
) -> Vec<ExpirationCandidate> {
    candidates.sort_by_key(|c| {
        (
            c.distance_from(target_dte),
            Reverse(c.option_count),
            c.expiration,
        )
    });
    candidates
}

/// Select the best in-window candidate for the request.
///
/// Returns `None` when no candidate falls inside the window. The remaining
/// in-window candidates become `alternatives`, in the same rank order.
/// Liquidity only orders candidates; it never excludes a unique in-window
/// match.
#[must_use]
pub fn select(
    candidates: &[ExpirationCandidate],
    req: &DiscoveryRequest,
) -> Option<DiscoveryResult> {
    let ranked = rank(in_window(candidates, req), req.target_dte());
    let mut ranked = ranked.into_iter();
    let selected = ranked.next()?;
    Some(DiscoveryResult {
        distance_from_target: selected.distance_from(req.target_dte()),
        alternatives: ranked.collect(),
        selected,
    })
}
