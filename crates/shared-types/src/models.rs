use serde::{Deserialize, Serialize};

/// Classroom user role controlling which dashboard is shown.
///
/// - `Student` — sees their own subjects, attendance, and assignments.
/// - `Faculty` — sees taught subjects, class rosters, and grading queues.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    /// Parse a role key. Unknown values yield `None` rather than a default —
    /// there is no sensible fallback role for an authenticated identity.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "faculty" => Some(Role::Faculty),
            _ => None,
        }
    }

    /// Lowercase key used in serialized form and data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
        }
    }
}

/// A fixed demo account in the credential store.
///
/// Passwords are stored in plaintext on purpose — this is a demo gate with
/// two hard-coded accounts, not a user-management system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// The authenticated user for the current session.
///
/// Exists only between a successful login and the next logout/back action.
/// Never persisted — a page reload starts over at the landing view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}
