use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque, globally unique account identifier issued by the identity
/// provider. The application never generates or mutates one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Principal(String);

impl Principal {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Principal(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
