use crate::models::Role;
use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of the (permanently disabled) registration form.
///
/// The fields mirror the form so the gate can be called like a real
/// operation, but every submission is rejected and no account is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}
