//! Scadenza discovers the optimal option-expiration date for a ticker.
//!
//! Overview
//! - Wraps a pluggable `scadenza_core::ExpirationsProvider` that lists the
//!   currently available expirations for an instrument.
//! - Selects the single best expiration for a target DTE and tolerance,
//!   ranked by closeness to target, then liquidity, then earliest date.
//! - Folds upstream failures into a `Discovery::NotFound` outcome instead of
//!   erroring: a down feed or a thin calendar is a normal result, not a
//!   crash.
//! - Carries the DTE policy rules (offered selections, account and market
//!   recommendations, risk assessment) next to discovery.
//!
//! Key behaviors and trade-offs
//! - The discoverer never selects outside the request window. When nothing
//!   fits, callers may pass an explicit secondary request (e.g. a
//!   shorter-dated 7±3 window) via
//!   [`Scadenza::find_optimal_dte_with_fallback`]; the fallback is a second
//!   request, never a silent widening of the first.
//! - Requests validate on construction (`DiscoveryRequest::new`), so invalid
//!   targets fail fast with `InvalidArg` before any upstream call.
//! - The component is stateless: no caching of candidate lists, no locking.
//!   Concurrent discoveries are independent. Caching and timeouts belong to
//!   the injected provider.
//!
//! Examples
//! Building a discoverer and finding a monthly expiration:
//! ```rust,ignore
//! use std::sync::Arc;
//! use scadenza::{DiscoveryRequest, Scadenza};
//! use scadenza_core::{AssetKind, Instrument};
//!
//! let provider = Arc::new(BrokerExpirations::new(session));
//! let scadenza = Scadenza::builder().with_provider(provider).build()?;
//!
//! let spy = Instrument::from_symbol("SPY", AssetKind::Equity)?;
//! let req = DiscoveryRequest::new(32, 5)?;
//! match scadenza.find_optimal_dte(&spy, &req).await {
//!     scadenza::Discovery::Found(r) => println!("trade {} DTE", r.selected_dte()),
//!     scadenza::Discovery::NotFound(m) => println!("nothing near {} days", m.target_dte),
//! }
//! ```
//!
//! See `scadenza/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod discover;
mod policy;

pub use crate::core::{Scadenza, ScadenzaBuilder};

// Re-export core types for convenience
pub use scadenza_core::{
    // Foundational domain identifiers
    AssetKind,
    Discovery,
    DiscoveryMiss,
    // Request/result types
    DiscoveryRequest,
    DiscoveryResult,
    DteAssessment,
    DteDataConfig,
    // Policy configuration
    DtePolicy,
    ExpirationCandidate,
    // The injected capability
    ExpirationsProvider,
    Instrument,
    MarketTrend,
    MissReason,
    RiskLevel,
    RiskTolerance,
    ScadenzaError,
    Symbol,
    calendar,
    selection,
};
