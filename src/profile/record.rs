use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::store::Partition;

/// The two account roles. Each maps to exactly one storage partition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Commuter,
    Driver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Commuter => "commuter",
            Role::Driver => "driver",
        }
    }

    pub fn partition(&self) -> Partition {
        match self {
            Role::Commuter => Partition::Commuter,
            Role::Driver => Partition::Driver,
        }
    }
}

/// Extra fields carried only by driver-partition records. The approval
/// flag is mutated by an out-of-band administrative process, never here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverDetails {
    pub drivers_license: String,
    pub vehicle_details: String,
    pub plate_number: String,
    pub approved: bool,
}

/// Stored profile document, keyed by principal in exactly one partition.
/// The role tag must match the partition the record resides in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub driver: Option<DriverDetails>,
}

/// Raw sign-up input as captured by the UI layer. Driver-only fields stay
/// `None` for commuter registrations.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub drivers_license: Option<String>,
    pub vehicle_details: Option<String>,
    pub plate_number: Option<String>,
}

impl SignupForm {
    /// Build the stored record from validated input: trim every string,
    /// lowercase the email, uppercase license and plate. The driver
    /// approval flag is forced false regardless of caller input.
    pub fn normalized(&self, role: Role, created_at: DateTime<Utc>) -> ProfileRecord {
        let driver = match role {
            Role::Commuter => None,
            Role::Driver => Some(DriverDetails {
                drivers_license: self
                    .drivers_license
                    .as_deref()
                    .unwrap_or_default()
                    .trim()
                    .to_uppercase(),
                vehicle_details: self
                    .vehicle_details
                    .as_deref()
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
                // Plates are stored in canonical compact form: separators
                // removed, letters uppercased.
                plate_number: self
                    .plate_number
                    .as_deref()
                    .unwrap_or_default()
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != '-')
                    .collect::<String>()
                    .to_uppercase(),
                approved: false,
            }),
        };
        ProfileRecord {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone_number: self.phone_number.trim().to_string(),
            role,
            created_at,
            driver,
        }
    }
}
