use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::{ProfileRecord, Role};
use crate::tprintln;

use super::principal::Principal;

pub type SessionToken = String;

/// Explicit session value handed to the caller on a successful resolve.
/// There is no process-wide "current user"; whoever holds the value holds
/// the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub token: SessionToken,
    pub principal: Principal,
    pub role: Role,
    pub record: ProfileRecord,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

fn gen_id() -> String {
    // 256-bit random token base64url without padding
    use base64::Engine;
    let mut buf = [0u8; 32];
    let _ = getrandom::getrandom(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Mints session values for resolved principals. Validity bookkeeping
/// stays at the identity provider; the TTL here only stamps expiry for
/// callers that impose their own timeout policy.
#[derive(Debug, Clone)]
pub struct SessionManager {
    pub ttl: Duration,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self { ttl: Duration::seconds(60 * 60) }
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn issue(&self, principal: Principal, role: Role, record: ProfileRecord) -> Session {
        let now = Utc::now();
        let sid = gen_id();
        let token = gen_id();
        tprintln!(
            "session.issue principal={} role={} sid={} ttl_secs={}",
            principal,
            role.as_str(),
            sid,
            self.ttl.num_seconds()
        );
        Session {
            session_id: sid,
            token,
            principal,
            role,
            record,
            issued_at: now,
            expires_at: now + self.ttl,
        }
    }
}
