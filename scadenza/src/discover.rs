use paft::domain::Instrument;

use scadenza_core::selection;
use scadenza_types::{Discovery, DiscoveryRequest, ExpirationCandidate, MissReason, ScadenzaError};

use crate::Scadenza;

impl Scadenza {
    /// Find the optimal expiration for `req`, never selecting outside its
    /// acceptance window.
    ///
    /// Upstream failures (a down feed, an asset kind the provider does not
    /// cover) and thin calendars are normal outcomes, reported as
    /// [`Discovery::NotFound`] with a reason tag; this operation does not
    /// fail and performs exactly one upstream read.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "scadenza::discover",
            skip(self),
            fields(
                symbol = %instrument.symbol(),
                target = req.target_dte(),
                tolerance = req.tolerance(),
            ),
        )
    )]
    pub async fn find_optimal_dte(
        &self,
        instrument: &Instrument,
        req: &DiscoveryRequest,
    ) -> Discovery {
        match self.list_candidates(instrument).await {
            Ok(candidates) if candidates.is_empty() => {
                Discovery::miss(req, MissReason::EmptyCalendar)
            }
            Ok(candidates) => match selection::select(&candidates, req) {
                Some(result) => Discovery::Found(result),
                None => Discovery::miss(req, MissReason::NoneInWindow),
            },
            Err(e) => Discovery::miss(req, MissReason::Upstream(e.to_string())),
        }
    }

    /// Find the optimal expiration, retrying once with an explicit secondary
    /// request when the primary misses.
    ///
    /// The fallback is a second, caller-chosen request (e.g. a shorter-dated
    /// 7±3 window), not a widening of the first: the primary tolerance is
    /// never exceeded silently. A miss on both attempts reports the primary
    /// request's target and tolerance, so callers can still apply their
    /// nominal-target last resort.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "scadenza::discover",
            skip(self),
            fields(
                symbol = %instrument.symbol(),
                target = primary.target_dte(),
                fallback_target = fallback.target_dte(),
            ),
        )
    )]
    pub async fn find_optimal_dte_with_fallback(
        &self,
        instrument: &Instrument,
        primary: &DiscoveryRequest,
        fallback: &DiscoveryRequest,
    ) -> Discovery {
        match self.find_optimal_dte(instrument, primary).await {
            found @ Discovery::Found(_) => found,
            Discovery::NotFound(primary_miss) => {
                match self.find_optimal_dte(instrument, fallback).await {
                    found @ Discovery::Found(_) => found,
                    Discovery::NotFound(_) => Discovery::NotFound(primary_miss),
                }
            }
        }
    }

    pub(crate) async fn list_candidates(
        &self,
        instrument: &Instrument,
    ) -> Result<Vec<ExpirationCandidate>, ScadenzaError> {
        if !self.provider.supports_kind(*instrument.kind()) {
            return Err(ScadenzaError::unsupported("expirations"));
        }
        self.provider
            .available_expirations(instrument)
            .await
            .map_err(|e| crate::core::tag_err(self.provider.name(), e))
    }
}
