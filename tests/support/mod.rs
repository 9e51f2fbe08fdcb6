//! In-memory fakes for the two external collaborators, substitutable for
//! the capability interfaces so the resolver is testable without a live
//! backend. Both fakes count calls so tests can assert on collaborator
//! traffic, and both can be switched unreachable to exercise the network
//! failure paths.
#![allow(dead_code)] // each test binary uses a different slice of this module

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use parking_lot::RwLock;
use password_hash::{PasswordHash, SaltString};
use uuid::Uuid;

use ruta_auth::identity::{IdentityProvider, Principal, ProviderFailure};
use ruta_auth::profile::{Partition, ProfileRecord, ProfileStore, StoreFailure};
use ruta_auth::tprintln;

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .unwrap();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn phc_for(password: &str) -> String {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).expect("salt");
    let salt = SaltString::encode_b64(&salt_bytes).expect("salt b64");
    let argon2 = Argon2::default();
    argon2.hash_password(password.as_bytes(), &salt).unwrap().to_string()
}

fn verify_phc(hash: &str, password: &str) -> bool {
    if let Ok(parsed) = PasswordHash::new(hash) {
        Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
    } else {
        false
    }
}

struct Account {
    principal: Principal,
    password_phc: String,
}

/// Fake identity provider. Emails are keyed case-insensitively, matching
/// how the real backend treats them. A successful create or verify leaves
/// an authenticated session behind until `invalidate` removes it.
#[derive(Default)]
pub struct FakeIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    active_sessions: RwLock<HashSet<Principal>>,
    disabled: RwLock<HashSet<String>>,
    unreachable: AtomicBool,
    fail_invalidate: AtomicBool,
    pub create_calls: AtomicUsize,
    pub verify_calls: AtomicUsize,
    pub invalidate_calls: AtomicUsize,
}

impl FakeIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unreachable(&self, v: bool) {
        self.unreachable.store(v, Ordering::SeqCst);
    }

    pub fn set_fail_invalidate(&self, v: bool) {
        self.fail_invalidate.store(v, Ordering::SeqCst);
    }

    pub fn disable_account(&self, email: &str) {
        self.disabled.write().insert(email.trim().to_lowercase());
    }

    /// True while the provider still holds an authenticated session for
    /// the principal.
    pub fn has_active_session(&self, principal: &Principal) -> bool {
        self.active_sessions.read().contains(principal)
    }

    pub fn total_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
            + self.verify_calls.load(Ordering::SeqCst)
            + self.invalidate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderFailure> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(ProviderFailure::NetworkUnreachable);
        }
        let key = email.trim().to_lowercase();
        if !key.contains('@') {
            return Err(ProviderFailure::MalformedEmail);
        }
        if password.chars().count() < 6 {
            return Err(ProviderFailure::WeakPassword);
        }
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&key) {
            return Err(ProviderFailure::EmailTaken);
        }
        let principal = Principal::new(Uuid::new_v4().to_string());
        accounts.insert(key.clone(), Account {
            principal: principal.clone(),
            password_phc: phc_for(password),
        });
        // The real backend signs the new account in as part of creation.
        self.active_sessions.write().insert(principal.clone());
        tprintln!("fake_provider.create email={} principal={}", key, principal);
        Ok(principal)
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, ProviderFailure> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(ProviderFailure::NetworkUnreachable);
        }
        let key = email.trim().to_lowercase();
        if self.disabled.read().contains(&key) {
            return Err(ProviderFailure::AccountDisabled);
        }
        let accounts = self.accounts.read();
        let Some(account) = accounts.get(&key) else {
            return Err(ProviderFailure::CredentialMismatch);
        };
        if !verify_phc(&account.password_phc, password) {
            return Err(ProviderFailure::CredentialMismatch);
        }
        self.active_sessions.write().insert(account.principal.clone());
        tprintln!("fake_provider.verify email={} principal={}", key, account.principal);
        Ok(account.principal.clone())
    }

    async fn invalidate(&self, principal: &Principal) -> Result<(), ProviderFailure> {
        self.invalidate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_invalidate.load(Ordering::SeqCst) {
            return Err(ProviderFailure::NetworkUnreachable);
        }
        self.active_sessions.write().remove(principal);
        tprintln!("fake_provider.invalidate principal={}", principal);
        Ok(())
    }
}

/// Fake partitioned document store with per-partition read counters.
#[derive(Default)]
pub struct FakeProfileStore {
    commuters: RwLock<HashMap<Principal, ProfileRecord>>,
    drivers: RwLock<HashMap<Principal, ProfileRecord>>,
    unreachable: AtomicBool,
    pub commuter_gets: AtomicUsize,
    pub driver_gets: AtomicUsize,
    pub puts: AtomicUsize,
}

impl FakeProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unreachable(&self, v: bool) {
        self.unreachable.store(v, Ordering::SeqCst);
    }

    /// Seed a record directly, bypassing the resolver. Used to set up
    /// invariant-violation scenarios and out-of-band state.
    pub fn seed(&self, partition: Partition, principal: &Principal, record: ProfileRecord) {
        match partition {
            Partition::Commuter => self.commuters.write().insert(principal.clone(), record),
            Partition::Driver => self.drivers.write().insert(principal.clone(), record),
        };
    }

    /// Flip a driver's approval flag, standing in for the out-of-band
    /// administrative process.
    pub fn approve_driver(&self, principal: &Principal) {
        if let Some(record) = self.drivers.write().get_mut(principal) {
            if let Some(details) = record.driver.as_mut() {
                details.approved = true;
            }
        }
    }

    pub fn total_calls(&self) -> usize {
        self.commuter_gets.load(Ordering::SeqCst)
            + self.driver_gets.load(Ordering::SeqCst)
            + self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for FakeProfileStore {
    async fn get(
        &self,
        partition: Partition,
        principal: &Principal,
    ) -> Result<Option<ProfileRecord>, StoreFailure> {
        match partition {
            Partition::Commuter => self.commuter_gets.fetch_add(1, Ordering::SeqCst),
            Partition::Driver => self.driver_gets.fetch_add(1, Ordering::SeqCst),
        };
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreFailure("connection reset".into()));
        }
        let map = match partition {
            Partition::Commuter => self.commuters.read(),
            Partition::Driver => self.drivers.read(),
        };
        Ok(map.get(principal).cloned())
    }

    async fn put(
        &self,
        partition: Partition,
        principal: &Principal,
        record: &ProfileRecord,
    ) -> Result<(), StoreFailure> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreFailure("connection reset".into()));
        }
        let mut map = match partition {
            Partition::Commuter => self.commuters.write(),
            Partition::Driver => self.drivers.write(),
        };
        map.insert(principal.clone(), record.clone());
        Ok(())
    }
}
