//! Unified outcome/error model for the session resolution flow.
//! Every collaborator failure is translated into one of the kinds below at
//! the resolver boundary; no provider-specific error crosses it. Each kind
//! carries a stable code plus a user-facing message ready for the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::identity::provider::ProviderFailure;
use crate::profile::store::StoreFailure;

/// Input field categories named by validation failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    PasswordConfirmation,
    License,
    Vehicle,
    Plate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
            Field::License => "license",
            Field::Vehicle => "vehicle",
            Field::Plate => "plate",
        }
    }
}

/// Why the identity provider rejected a sign-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsReason {
    InvalidCredentials,
    DisabledAccount,
    RateLimited,
    NetworkUnreachable,
}

/// Why the identity provider rejected an account creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationReason {
    EmailTaken,
    WeakPassword,
    MalformedEmail,
    NetworkUnreachable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreOp {
    Get,
    Put,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthError {
    /// Malformed or missing input, detected before any external call.
    Validation { field: Field },
    /// The identity provider rejected the credentials.
    Credentials { reason: CredentialsReason },
    /// The identity provider rejected account creation.
    Registration { reason: RegistrationReason },
    /// Valid credentials, driver role, approval flag still false.
    PendingApproval,
    /// Valid credentials but no profile record in either partition.
    AccountIncomplete,
    /// Profile store read/write failed for reasons other than absence.
    Store { op: StoreOp, message: String },
}

impl AuthError {
    pub fn validation(field: Field) -> Self {
        AuthError::Validation { field }
    }

    pub fn store(op: StoreOp, failure: StoreFailure) -> Self {
        AuthError::Store { op, message: failure.to_string() }
    }

    /// Translate a provider failure raised while verifying credentials.
    /// Kinds the provider does not emit on that call fold to invalid-credentials.
    pub fn from_signin_failure(failure: ProviderFailure) -> Self {
        let reason = match failure {
            ProviderFailure::CredentialMismatch => CredentialsReason::InvalidCredentials,
            ProviderFailure::AccountDisabled => CredentialsReason::DisabledAccount,
            ProviderFailure::TooManyAttempts => CredentialsReason::RateLimited,
            ProviderFailure::NetworkUnreachable => CredentialsReason::NetworkUnreachable,
            ProviderFailure::EmailTaken
            | ProviderFailure::WeakPassword
            | ProviderFailure::MalformedEmail => CredentialsReason::InvalidCredentials,
        };
        AuthError::Credentials { reason }
    }

    /// Translate a provider failure raised while creating an account.
    /// Kinds the provider does not emit on that call fold to network-unreachable.
    pub fn from_signup_failure(failure: ProviderFailure) -> Self {
        let reason = match failure {
            ProviderFailure::EmailTaken => RegistrationReason::EmailTaken,
            ProviderFailure::WeakPassword => RegistrationReason::WeakPassword,
            ProviderFailure::MalformedEmail => RegistrationReason::MalformedEmail,
            ProviderFailure::NetworkUnreachable => RegistrationReason::NetworkUnreachable,
            ProviderFailure::CredentialMismatch
            | ProviderFailure::AccountDisabled
            | ProviderFailure::TooManyAttempts => RegistrationReason::NetworkUnreachable,
        };
        AuthError::Registration { reason }
    }

    pub fn code_str(&self) -> &'static str {
        match self {
            AuthError::Validation { .. } => "validation",
            AuthError::Credentials { .. } => "auth_failed",
            AuthError::Registration { .. } => "registration_failed",
            AuthError::PendingApproval => "pending_approval",
            AuthError::AccountIncomplete => "account_incomplete",
            AuthError::Store { .. } => "store_error",
        }
    }

    /// Human-readable message suitable for direct display on the screen.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation { field } => match field {
                Field::Email => "Please enter a valid email address.".into(),
                Field::Phone => "Please enter a valid phone number.".into(),
                Field::Password => "Password should be at least 6 characters.".into(),
                Field::PasswordConfirmation => "Passwords do not match.".into(),
                Field::License => "Please enter a valid driver's license number.".into(),
                Field::Plate => "Please enter a valid plate number.".into(),
                Field::FirstName | Field::LastName | Field::Vehicle => {
                    "Please fill in all fields.".into()
                }
            },
            AuthError::Credentials { reason } => match reason {
                CredentialsReason::InvalidCredentials => {
                    "The email or password you entered is incorrect. Please try again.".into()
                }
                CredentialsReason::DisabledAccount => {
                    "This account has been disabled. Please contact support.".into()
                }
                CredentialsReason::RateLimited => {
                    "Too many failed login attempts. Please try again later.".into()
                }
                CredentialsReason::NetworkUnreachable => {
                    "Please check your internet connection and try again.".into()
                }
            },
            AuthError::Registration { reason } => match reason {
                RegistrationReason::EmailTaken => "This email is already registered.".into(),
                RegistrationReason::WeakPassword => {
                    "Password should be at least 6 characters.".into()
                }
                RegistrationReason::MalformedEmail => "Invalid email format.".into(),
                RegistrationReason::NetworkUnreachable => {
                    "Please check your internet connection and try again.".into()
                }
            },
            AuthError::PendingApproval => {
                "Your driver account is waiting for approval. Please contact support.".into()
            }
            AuthError::AccountIncomplete => {
                "Your account data is incomplete. Please contact support.".into()
            }
            AuthError::Store { .. } => "An error occurred. Please try again.".into(),
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Validation { field } => {
                write!(f, "{}: invalid {}", self.code_str(), field.as_str())
            }
            AuthError::Store { op, message } => {
                write!(f, "{}: {:?} failed: {}", self.code_str(), op, message)
            }
            _ => write!(f, "{}: {}", self.code_str(), self.user_message()),
        }
    }
}

impl std::error::Error for AuthError {}

pub type AuthResult<T> = Result<T, AuthError>;
