use auth::{Session, View};
use dioxus::prelude::*;
use shared_types::{AuthError, Identity, Role};
use tracing::debug;

/// The per-tab session behind a signal, provided through context by `App`.
///
/// Every view reads and mutates session state through this handle, so the
/// state machine in the `auth` crate stays the single source of truth and
/// nothing is ambient or global.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    /// The view currently derived from session state.
    pub fn view(&self) -> View {
        self.session.read().view()
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity().cloned()
    }

    /// Whether a login attempt is in flight (drives the disabled submit).
    pub fn attempt_pending(&self) -> bool {
        self.session.read().attempt_pending()
    }

    pub fn select_role(&mut self, role: Role) {
        debug!(role = %role.as_str(), "portal selected");
        self.session.write().select_role(role);
    }

    /// Mark an attempt as in flight. Returns `false` when one already is
    /// (the caller must not start a second gate call).
    pub fn begin_attempt(&mut self) -> bool {
        self.session.write().begin_attempt()
    }

    /// Settle the in-flight attempt with the gate's outcome.
    pub fn complete_attempt(&mut self, outcome: &Result<Identity, AuthError>) {
        self.session.write().complete_attempt(outcome);
    }

    pub fn back(&mut self) {
        self.session.write().back();
    }

    pub fn logout(&mut self) {
        debug!("logging out");
        self.session.write().logout();
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
