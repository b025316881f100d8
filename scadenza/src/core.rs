use std::sync::Arc;

use scadenza_core::ExpirationsProvider;
use scadenza_types::{DtePolicy, ScadenzaError};

/// Orchestrator that runs expiration discovery against an injected provider.
pub struct Scadenza {
    pub(crate) provider: Arc<dyn ExpirationsProvider>,
    pub(crate) policy: DtePolicy,
}

impl std::fmt::Debug for Scadenza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scadenza")
            .field("provider", &self.provider.name())
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for constructing a `Scadenza` orchestrator.
pub struct ScadenzaBuilder {
    provider: Option<Arc<dyn ExpirationsProvider>>,
    policy: DtePolicy,
}

impl Default for ScadenzaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScadenzaBuilder {
    /// Create a new builder with the default DTE policy and no provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            policy: DtePolicy::default(),
        }
    }

    /// Register the expirations provider.
    ///
    /// The provider is the discoverer's only upstream dependency. Deployment
    /// concerns (sandbox vs. production endpoints, caching, retries,
    /// timeouts) belong to the provider implementation; the discoverer stays
    /// oblivious to them.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ExpirationsProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the default DTE policy.
    ///
    /// The policy drives the convenience operations (offered selections,
    /// recommendations, risk assessment); discovery itself only reads the
    /// caller's request.
    #[must_use]
    pub fn policy(mut self, policy: DtePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the `Scadenza` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no provider has been registered via
    /// [`with_provider`](Self::with_provider).
    pub fn build(self) -> Result<Scadenza, ScadenzaError> {
        let provider = self.provider.ok_or_else(|| {
            ScadenzaError::invalid_arg("no provider registered; add one via with_provider(...)")
        })?;
        Ok(Scadenza {
            provider,
            policy: self.policy,
        })
    }
}

impl Scadenza {
    /// Start building a new `Scadenza` instance.
    #[must_use]
    pub fn builder() -> ScadenzaBuilder {
        ScadenzaBuilder::new()
    }

    /// The configured DTE policy.
    #[must_use]
    pub const fn dte_policy(&self) -> &DtePolicy {
        &self.policy
    }
}

/// Tag opaque provider failures with the provider name; already-tagged,
/// unsupported, and not-found errors pass through unchanged.
pub(crate) fn tag_err(provider: &str, e: ScadenzaError) -> ScadenzaError {
    match e {
        e @ (ScadenzaError::NotFound { .. }
        | ScadenzaError::Provider { .. }
        | ScadenzaError::Unsupported { .. }) => e,
        other => ScadenzaError::provider(provider, other.to_string()),
    }
}
