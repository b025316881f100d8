use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DiscoveryRequest;

/// One available expiration date with its liquidity indicator.
///
/// Produced fresh on each discovery call from the injected listing
/// capability; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationCandidate {
    /// Calendar date on which the contracts expire.
    pub expiration: NaiveDate,
    /// Calendar days between the listing's "today" and `expiration`.
    pub days_to_expiration: i64,
    /// Number of listed contracts for this date. A liquidity proxy used only
    /// for tie-breaking, never as a filter.
    pub option_count: u64,
}

impl ExpirationCandidate {
    /// Absolute distance, in days, between this candidate and `target_dte`.
    #[must_use]
    pub const fn distance_from(&self, target_dte: i64) -> i64 {
        (self.days_to_expiration - target_dte).abs()
    }
}

/// Successful discovery outcome: the selected expiration plus the in-window
/// alternatives that ranked below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryResult {
    /// The top-ranked candidate.
    pub selected: ExpirationCandidate,
    /// Absolute distance between the selection and the requested target.
    pub distance_from_target: i64,
    /// Remaining in-window candidates in rank order, selected excluded.
    pub alternatives: Vec<ExpirationCandidate>,
}

impl DiscoveryResult {
    /// Days-to-expiration of the selected candidate.
    #[must_use]
    pub const fn selected_dte(&self) -> i64 {
        self.selected.days_to_expiration
    }

    /// Expiration date of the selected candidate.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.selected.expiration
    }

    /// Contract count of the selected candidate.
    #[must_use]
    pub const fn option_count(&self) -> u64 {
        self.selected.option_count
    }
}

/// Why a discovery produced no selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum MissReason {
    /// The provider listed no future expirations for the ticker.
    EmptyCalendar,
    /// Expirations exist, but none fell inside the acceptance window.
    NoneInWindow,
    /// The provider call failed; recovered locally.
    Upstream(String),
}

/// A discovery that found no acceptable expiration.
///
/// Carries the originally requested target and tolerance so callers can
/// apply their own ultimate fallback (e.g. trade the nominal target as-is,
/// accepting it may not correspond to a listed expiration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryMiss {
    /// Target DTE of the original request.
    pub target_dte: i64,
    /// Tolerance of the original request.
    pub tolerance: i64,
    /// Why no candidate was selected.
    pub reason: MissReason,
}

/// Outcome of an optimal-expiration discovery.
///
/// `NotFound` is a normal, expected outcome (thin calendars, a closed feed),
/// not an error: callers must treat it as a valid result variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Discovery {
    /// A candidate inside the acceptance window was selected.
    Found(DiscoveryResult),
    /// No candidate satisfied the request (after any explicit fallback).
    NotFound(DiscoveryMiss),
}

impl Discovery {
    /// Build a miss for `req` with the given reason.
    #[must_use]
    pub fn miss(req: &DiscoveryRequest, reason: MissReason) -> Self {
        Self::NotFound(DiscoveryMiss {
            target_dte: req.target_dte(),
            tolerance: req.tolerance(),
            reason,
        })
    }

    /// Whether a candidate was selected.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The successful result, if any.
    #[must_use]
    pub const fn found(&self) -> Option<&DiscoveryResult> {
        match self {
            Self::Found(r) => Some(r),
            Self::NotFound(_) => None,
        }
    }

    /// The selected DTE, or the originally requested target when nothing was
    /// found. The nominal target may not correspond to a listed expiration;
    /// accepting it anyway is the caller's documented last resort.
    #[must_use]
    pub const fn dte_or_target(&self) -> i64 {
        match self {
            Self::Found(r) => r.selected.days_to_expiration,
            Self::NotFound(m) => m.target_dte,
        }
    }
}
