use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::Principal;

use super::record::ProfileRecord;

/// The two disjoint storage namespaces. Names match the backing document
/// collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Commuter,
    Driver,
}

impl Partition {
    /// Collection name in the backing document store.
    pub fn collection(&self) -> &'static str {
        match self {
            Partition::Commuter => "commuters",
            Partition::Driver => "drivers",
        }
    }
}

/// A store call failed for reasons other than the record being absent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("profile store unavailable: {0}")]
pub struct StoreFailure(pub String);

/// Capability interface over the external profile document store. Point
/// lookups and inserts only; this flow never updates or deletes records.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Point lookup. `Ok(None)` means the partition holds no record for
    /// the principal; that is not a failure.
    async fn get(
        &self,
        partition: Partition,
        principal: &Principal,
    ) -> Result<Option<ProfileRecord>, StoreFailure>;

    /// Insert a record under the principal's identifier.
    async fn put(
        &self,
        partition: Partition,
        principal: &Principal,
        record: &ProfileRecord,
    ) -> Result<(), StoreFailure>;
}
