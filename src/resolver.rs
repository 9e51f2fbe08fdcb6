//! Session resolution: credentials in, role-resolved session out.
//!
//! The resolver owns no state of its own; it orchestrates the identity
//! provider and the profile store through their capability interfaces and
//! translates every collaborator failure into the [`AuthError`] taxonomy.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::ResolverConfig;
use crate::error::{AuthError, AuthResult, StoreOp};
use crate::identity::{IdentityProvider, Principal, Session, SessionManager};
use crate::profile::{ProfileRecord, ProfileStore, Role, SignupForm};
use crate::validate;

pub struct SessionResolver {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    sessions: SessionManager,
    config: ResolverConfig,
}

impl SessionResolver {
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<dyn ProfileStore>) -> Self {
        Self::with_config(provider, store, ResolverConfig::default())
    }

    pub fn with_config(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        config: ResolverConfig,
    ) -> Self {
        let sessions = SessionManager::new(config.session_ttl);
        Self { provider, store, sessions, config }
    }

    /// Authenticate a credential pair and resolve the account's role.
    ///
    /// Lookup order is commuter-first, then driver; a principal present in
    /// both partitions resolves as commuter and the driver partition is
    /// never read. An unapproved driver or a principal with no record in
    /// either partition is signed back out (best-effort) before the gating
    /// outcome is returned, so the caller never holds a session for an
    /// account the gate rejected.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Session> {
        validate::validate_signin(email, password)?;
        let email = email.trim();

        let principal = match self.provider.verify_credentials(email, password).await {
            Ok(p) => p,
            Err(failure) => {
                info!("auth.login rejected email={} reason={}", email, failure);
                return Err(AuthError::from_signin_failure(failure));
            }
        };

        match self.lookup_profile(&principal, None).await? {
            Some((Role::Driver, record))
                if !record.driver.as_ref().map_or(false, |d| d.approved) =>
            {
                self.best_effort_sign_out(&principal).await;
                info!("auth.login gated principal={} outcome=pending_approval", principal);
                Err(AuthError::PendingApproval)
            }
            Some((role, record)) => {
                info!("auth.login ok principal={} role={}", principal, role.as_str());
                Ok(self.sessions.issue(principal, role, record))
            }
            None => {
                self.best_effort_sign_out(&principal).await;
                warn!("auth.login gated principal={} outcome=account_incomplete", principal);
                Err(AuthError::AccountIncomplete)
            }
        }
    }

    /// Create an account and write its profile record.
    ///
    /// The two writes are not transactional: a profile write failure after
    /// account creation leaves an orphaned provider account, which a later
    /// `authenticate` surfaces as `AccountIncomplete`. The new principal is
    /// returned without signing it out.
    pub async fn register(&self, role: Role, form: &SignupForm) -> AuthResult<Principal> {
        validate::validate_signup(role, form, self.config.min_password_len)?;
        let email = form.email.trim();

        let principal = match self.provider.create_account(email, &form.password).await {
            Ok(p) => p,
            Err(failure) => {
                info!("auth.register rejected email={} reason={}", email, failure);
                return Err(AuthError::from_signup_failure(failure));
            }
        };

        let record = form.normalized(role, Utc::now());
        if let Err(failure) = self.store.put(role.partition(), &principal, &record).await {
            warn!(
                "auth.register orphaned principal={} partition={}: {}",
                principal,
                role.partition().collection(),
                failure
            );
            return Err(AuthError::store(StoreOp::Put, failure));
        }

        info!("auth.register ok principal={} role={}", principal, role.as_str());
        Ok(principal)
    }

    /// Invalidate the session's authenticated state at the provider.
    pub async fn sign_out(&self, session: &Session) -> AuthResult<()> {
        self.provider
            .invalidate(&session.principal)
            .await
            .map_err(AuthError::from_signin_failure)
    }

    /// Resolve which partition holds the principal's record. With a role
    /// hint only that partition is read; without one the fixed
    /// commuter-then-driver precedence applies.
    pub async fn lookup_profile(
        &self,
        principal: &Principal,
        role: Option<Role>,
    ) -> AuthResult<Option<(Role, ProfileRecord)>> {
        let order: &[Role] = match role {
            Some(Role::Commuter) => &[Role::Commuter],
            Some(Role::Driver) => &[Role::Driver],
            None => &[Role::Commuter, Role::Driver],
        };
        for candidate in order {
            let found = self
                .store
                .get(candidate.partition(), principal)
                .await
                .map_err(|f| AuthError::store(StoreOp::Get, f))?;
            if let Some(record) = found {
                return Ok(Some((*candidate, record)));
            }
        }
        Ok(None)
    }

    // Compensating sign-out for gating outcomes. A failure here may leave
    // a stale session at the provider; the gating outcome still stands.
    async fn best_effort_sign_out(&self, principal: &Principal) {
        if let Err(failure) = self.provider.invalidate(principal).await {
            warn!("auth.signout best-effort failed principal={}: {}", principal, failure);
        }
    }
}
