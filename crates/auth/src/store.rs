use shared_types::{Account, Role};

/// The fixed, read-only credential store.
///
/// Holds exactly two demo accounts for the lifetime of the process. There
/// are no mutation operations: registration is permanently disabled at the
/// gate, and nothing else writes here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    accounts: Vec<Account>,
}

impl CredentialStore {
    /// The two demo accounts: `student / student123` and
    /// `teacher / teacher123`.
    pub fn demo() -> Self {
        Self {
            accounts: vec![
                Account {
                    username: "student".to_string(),
                    password: "student123".to_string(),
                    role: Role::Student,
                },
                Account {
                    username: "teacher".to_string(),
                    password: "teacher123".to_string(),
                    role: Role::Faculty,
                },
            ],
        }
    }

    /// Look up an account by username. Exact-match and case-sensitive,
    /// no trimming.
    pub fn lookup(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::demo()
    }
}
