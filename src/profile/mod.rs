//! Profile-side types: the partitioned record model and the document-store
//! capability interface.

mod record;
pub mod store;

pub use record::{DriverDetails, ProfileRecord, Role, SignupForm};
pub use store::{Partition, ProfileStore, StoreFailure};
