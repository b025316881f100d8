//! Scadenza-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod candidate;
mod error;
mod policy;
mod request;

pub use candidate::{Discovery, DiscoveryMiss, DiscoveryResult, ExpirationCandidate, MissReason};
pub use error::ScadenzaError;
pub use policy::{
    DteAssessment, DteDataConfig, DtePolicy, MarketTrend, RiskLevel, RiskTolerance,
};
pub use request::DiscoveryRequest;
