use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure message shown for any bad login, never distinguishing an unknown
/// username from a wrong password (avoids username enumeration).
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

/// Message shown whenever a registration attempt is submitted. Registration
/// is permanently disabled in this demo — this is a business rule, not a
/// missing feature.
pub const REGISTRATION_DISABLED_MESSAGE: &str =
    "Account creation is currently disabled. Please use the demo credentials.";

/// Categorization of authentication errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidCredentials,
    RegistrationDisabled,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::InvalidCredentials => write!(f, "InvalidCredentials"),
            AuthErrorKind::RegistrationDisabled => write!(f, "RegistrationDisabled"),
        }
    }
}

/// Structured authentication error surfaced as inline text in the UI.
///
/// Both kinds are recoverable: a failed login re-presents the form, and a
/// registration attempt leaves everything untouched. Nothing propagates
/// past the view boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    /// Generic bad-credentials failure with the fixed user-facing message.
    pub fn invalid_credentials() -> Self {
        Self {
            kind: AuthErrorKind::InvalidCredentials,
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
        }
    }

    /// The permanent registration-disabled advisory.
    pub fn registration_disabled() -> Self {
        Self {
            kind: AuthErrorKind::RegistrationDisabled,
            message: REGISTRATION_DISABLED_MESSAGE.to_string(),
        }
    }

    /// User-facing message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AuthError {}
