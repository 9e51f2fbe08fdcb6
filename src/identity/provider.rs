use async_trait::async_trait;
use thiserror::Error;

use super::principal::Principal;

/// Failure kinds surfaced by an identity provider. These are the only
/// provider signals the resolver consumes; everything else a concrete
/// backend raises must be folded into one of them by its adapter.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ProviderFailure {
    #[error("email already registered")]
    EmailTaken,
    #[error("weak password")]
    WeakPassword,
    #[error("malformed email")]
    MalformedEmail,
    #[error("credential mismatch")]
    CredentialMismatch,
    #[error("account disabled")]
    AccountDisabled,
    #[error("too many attempts")]
    TooManyAttempts,
    #[error("network unreachable")]
    NetworkUnreachable,
}

/// Capability interface over the external identity provider. Tests
/// substitute an in-memory fake; production wires a real backend adapter.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a principal for the given email/password pair.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderFailure>;

    /// Verify an email/password pair, establishing an authenticated
    /// session at the provider on success.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderFailure>;

    /// Invalidate any authenticated session held for the principal.
    async fn invalidate(&self, principal: &Principal) -> Result<(), ProviderFailure>;
}
