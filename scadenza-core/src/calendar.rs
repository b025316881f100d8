use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use scadenza_types::ExpirationCandidate;

/// Signed calendar-day count from `today` to `expiration`.
#[must_use]
pub fn days_to_expiration(today: NaiveDate, expiration: NaiveDate) -> i64 {
    (expiration - today).num_days()
}

/// Group raw per-contract expiration dates into candidates.
///
/// Chain feeds often list one entry per contract; the per-date tally becomes
/// the candidate's `option_count`. Past dates are dropped; the result is
/// sorted by expiration date.
#[must_use]
pub fn tally_expirations(
    today: NaiveDate,
    dates: impl IntoIterator<Item = NaiveDate>,
) -> Vec<ExpirationCandidate> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for date in dates {
        if days_to_expiration(today, date) >= 0 {
            *counts.entry(date).or_insert(0) += 1;
        }
    }
    collect_candidates(today, counts)
}

/// Build candidates from pre-aggregated `(date, contract count)` pairs.
///
/// Past dates are dropped; duplicate dates accumulate their counts. The
/// result is sorted by expiration date.
#[must_use]
pub fn candidates_from_counts(
    today: NaiveDate,
    entries: impl IntoIterator<Item = (NaiveDate, u64)>,
) -> Vec<ExpirationCandidate> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for (date, count) in entries {
        if days_to_expiration(today, date) >= 0 {
            *counts.entry(date).or_insert(0) += count;
        }
    }
    collect_candidates(today, counts)
}

fn collect_candidates(
    today: NaiveDate,
    counts: BTreeMap<NaiveDate, u64>,
) -> Vec<ExpirationCandidate> {
    counts
        .into_iter()
        .map(|(expiration, option_count)| ExpirationCandidate {
            expiration,
            days_to_expiration: days_to_expiration(today, expiration),
            option_count,
        })
        .collect()
}

/// DTE of the next Friday, the most common weekly expiration day.
///
/// A Friday `today` maps to the following Friday (7 days out), never 0.
#[must_use]
pub fn next_friday_dte(today: NaiveDate) -> i64 {
    let days = (i64::from(Weekday::Fri.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(7);
    if days == 0 { 7 } else { days }
}
