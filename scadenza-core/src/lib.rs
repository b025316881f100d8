//! scadenza-core
//!
//! Core trait and pure algorithms shared across the scadenza ecosystem.
//!
//! - `provider`: the `ExpirationsProvider` capability trait implemented by
//!   market-data sources.
//! - `selection`: the pure optimal-expiration selection algorithm over an
//!   explicit comparison key.
//! - `calendar`: helpers for turning raw expiration feeds into candidates.
//! - `policy`: DTE policy rules (offered selections, recommendations, risk
//!   assessment) over a `DtePolicy` configuration.
//!
//! The selection and policy modules are synchronous and free of I/O; only
//! `provider` touches the async boundary, and it assumes the Tokio ecosystem
//! as the async runtime (via `async-trait`).
#![warn(missing_docs)]

/// Calendar helpers for building expiration candidates from raw feeds.
pub mod calendar;
/// DTE policy rules over a `DtePolicy` configuration.
pub mod policy;
/// The `ExpirationsProvider` capability trait.
pub mod provider;
/// Pure selection over expiration candidates.
pub mod selection;

pub use provider::ExpirationsProvider;
pub use scadenza_types::{
    Discovery, DiscoveryMiss, DiscoveryRequest, DiscoveryResult, DteAssessment, DteDataConfig,
    DtePolicy, ExpirationCandidate, MarketTrend, MissReason, RiskLevel, RiskTolerance,
    ScadenzaError,
};

pub use paft::domain::{AssetKind, Instrument, Symbol};
