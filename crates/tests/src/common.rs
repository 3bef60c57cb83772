use auth::{AuthGate, CredentialStore, Session};
use shared_types::{AuthError, Identity, LoginRequest};

/// A zero-latency gate over the demo credential table.
pub fn demo_gate() -> AuthGate {
    AuthGate::new(CredentialStore::demo())
}

pub fn creds(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

/// Drive a full login attempt through a session the way the UI does:
/// begin, authenticate, complete. Returns the gate's outcome.
pub async fn attempt_login(
    session: &mut Session,
    gate: &AuthGate,
    username: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    assert!(session.begin_attempt(), "attempt should be accepted");
    let outcome = gate.authenticate(&creds(username, password)).await;
    session.complete_attempt(&outcome);
    outcome
}
