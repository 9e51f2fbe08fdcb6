//! Identity-side types: the opaque principal, the provider capability
//! interface, and explicit session values. Keep the public surface thin and
//! split implementation across sub-modules.

mod principal;
pub mod provider;
mod session;

pub use principal::Principal;
pub use provider::{IdentityProvider, ProviderFailure};
pub use session::{Session, SessionManager, SessionToken};
