use chrono::{Days, NaiveDate};

use scadenza_core::ExpirationCandidate;
use scadenza_core::calendar::{candidates_from_counts, next_friday_dte};

/// Deterministic expiration ladder: eight weekly Fridays with liquidity
/// concentrated on the nearest dates, plus two thinner far-dated monthlies.
pub fn ladder(today: NaiveDate) -> Vec<ExpirationCandidate> {
    let first_friday = u64::try_from(next_friday_dte(today)).unwrap_or(7);

    let mut entries: Vec<(NaiveDate, u64)> = (0..8u64)
        .map(|week| {
            let date = today + Days::new(first_friday + week * 7);
            let count = 1_200u64.saturating_sub(week * 140).max(40);
            (date, count)
        })
        .collect();

    entries.push((today + Days::new(45), 90));
    entries.push((today + Days::new(73), 60));

    candidates_from_counts(today, entries)
}
