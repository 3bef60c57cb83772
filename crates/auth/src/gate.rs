use std::time::Duration;

use shared_types::{AuthError, Identity, LoginRequest, RegistrationRequest};
use tracing::{info, warn};

use crate::store::CredentialStore;

/// Validates submitted credentials against the credential store.
///
/// The gate can simulate a network round-trip by sleeping before yielding
/// its result; the default is no delay so tests stay fast, and the app
/// configures roughly one second for the interactive demo.
#[derive(Debug, Clone)]
pub struct AuthGate {
    store: CredentialStore,
    latency: Duration,
}

impl AuthGate {
    /// A gate with no simulated latency.
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
        }
    }

    /// A gate that waits `latency` before yielding each authentication
    /// result. A UX affordance only — correctness never depends on it.
    pub fn with_latency(store: CredentialStore, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Validate a username/password pair.
    ///
    /// Succeeds iff the store holds the username and the stored password
    /// equals the supplied one byte-for-byte. Unknown username and wrong
    /// password produce the same generic error so the message never leaks
    /// which usernames exist. No lockout, no rate limiting: repeated calls
    /// with the same input yield the same outcome.
    pub async fn authenticate(&self, request: &LoginRequest) -> Result<Identity, AuthError> {
        if !self.latency.is_zero() {
            pause(self.latency).await;
        }

        match self.store.lookup(&request.username) {
            Some(account) if account.password == request.password => {
                info!(username = %account.username, role = %account.role.as_str(), "login succeeded");
                Ok(Identity {
                    username: account.username.clone(),
                    role: account.role,
                })
            }
            _ => {
                warn!(username = %request.username, "login rejected");
                Err(AuthError::invalid_credentials())
            }
        }
    }

    /// Submit a registration request.
    ///
    /// Always fails: account creation is a permanently disabled operation
    /// in this demo, and no input can change that. The store is never
    /// touched.
    pub fn register(&self, request: &RegistrationRequest) -> Result<Identity, AuthError> {
        warn!(username = %request.username, "registration attempted while disabled");
        Err(AuthError::registration_disabled())
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(CredentialStore::demo())
    }
}

/// Suspend the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspend the current task for `duration` via `setTimeout`.
#[cfg(target_arch = "wasm32")]
async fn pause(duration: Duration) {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .ok()
        });
        if scheduled.is_none() {
            // No window (e.g. worker teardown) — resolve immediately.
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Role, INVALID_CREDENTIALS_MESSAGE};

    fn creds(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn valid_student_credentials_yield_student_identity() {
        let gate = AuthGate::default();
        let identity = gate
            .authenticate(&creds("student", "student123"))
            .await
            .unwrap();
        assert_eq!(identity.username, "student");
        assert_eq!(identity.role, Role::Student);
    }

    #[tokio::test]
    async fn valid_teacher_credentials_yield_faculty_identity() {
        let gate = AuthGate::default();
        let identity = gate
            .authenticate(&creds("teacher", "teacher123"))
            .await
            .unwrap();
        assert_eq!(identity.username, "teacher");
        assert_eq!(identity.role, Role::Faculty);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let gate = AuthGate::default();
        let wrong_password = gate
            .authenticate(&creds("teacher", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = gate.authenticate(&creds("admin", "admin")).await.unwrap_err();
        assert_eq!(wrong_password, unknown_user);
        assert_eq!(wrong_password.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn authentication_is_idempotent() {
        let gate = AuthGate::default();
        for _ in 0..3 {
            let identity = gate
                .authenticate(&creds("student", "student123"))
                .await
                .unwrap();
            assert_eq!(identity.role, Role::Student);
        }
        for _ in 0..3 {
            assert!(gate.authenticate(&creds("student", "nope")).await.is_err());
        }
        // No lockout: the valid pair still works after failures.
        assert!(gate
            .authenticate(&creds("student", "student123"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn credentials_are_exact_match() {
        let gate = AuthGate::default();
        assert!(gate
            .authenticate(&creds("Student", "student123"))
            .await
            .is_err());
        assert!(gate
            .authenticate(&creds("student", "Student123"))
            .await
            .is_err());
        assert!(gate
            .authenticate(&creds(" student", "student123"))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn registration_always_fails_and_never_mutates_the_store() {
        let gate = AuthGate::default();
        assert_eq!(gate.store().len(), 2);

        let request = RegistrationRequest {
            username: "newuser".to_string(),
            email: "new@example.com".to_string(),
            password: "hunter2".to_string(),
            role: Some(Role::Student),
        };
        let err = gate.register(&request).unwrap_err();
        assert_eq!(
            err.message(),
            "Account creation is currently disabled. Please use the demo credentials."
        );

        // Even an empty request fails the same way.
        assert!(gate.register(&RegistrationRequest::default()).is_err());
        assert_eq!(gate.store().len(), 2);
    }

    #[tokio::test]
    async fn default_gate_has_zero_latency() {
        let gate = AuthGate::default();
        assert_eq!(gate.latency(), Duration::ZERO);
    }

    #[tokio::test]
    async fn configured_latency_delays_the_result() {
        let gate = AuthGate::with_latency(CredentialStore::demo(), Duration::from_millis(50));
        let start = std::time::Instant::now();
        gate.authenticate(&creds("student", "student123"))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
