use serde::Serialize;

use crate::ScadenzaError;

/// A validated request for optimal-expiration discovery.
///
/// The acceptance window is `[target_dte - tolerance, target_dte + tolerance]`
/// in calendar days. The request validates on construction, so an in-flight
/// request is always well-formed and discovery operations never need to
/// re-check their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscoveryRequest {
    target_dte: i64,
    tolerance: i64,
}

impl DiscoveryRequest {
    /// Build a request for `target_dte` days out, accepting candidates up to
    /// `tolerance` days away on either side.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `target_dte <= 0` or `tolerance < 0`.
    pub fn new(target_dte: i64, tolerance: i64) -> Result<Self, ScadenzaError> {
        if target_dte <= 0 {
            return Err(ScadenzaError::invalid_arg(format!(
                "target_dte must be positive, got {target_dte}"
            )));
        }
        if tolerance < 0 {
            return Err(ScadenzaError::invalid_arg(format!(
                "tolerance must be non-negative, got {tolerance}"
            )));
        }
        Ok(Self {
            target_dte,
            tolerance,
        })
    }

    /// Target days-to-expiration.
    #[must_use]
    pub const fn target_dte(self) -> i64 {
        self.target_dte
    }

    /// Maximum accepted distance, in days, from the target.
    #[must_use]
    pub const fn tolerance(self) -> i64 {
        self.tolerance
    }

    /// Inclusive acceptance window as `(min_dte, max_dte)`.
    #[must_use]
    pub const fn window(self) -> (i64, i64) {
        (
            self.target_dte - self.tolerance,
            self.target_dte + self.tolerance,
        )
    }

    /// Whether `dte` lies inside the acceptance window.
    #[must_use]
    pub const fn accepts(self, dte: i64) -> bool {
        let (lo, hi) = self.window();
        lo <= dte && dte <= hi
    }
}
