use shared_types::{AuthError, Identity, Role};
use tracing::debug;

/// Which top-level screen is presented.
///
/// Always derived from [`Session`] state — a dashboard variant can only be
/// produced while the session holds an identity with the matching role, so
/// the "dashboard requires identity" invariant holds structurally instead
/// of relying on callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Login(Role),
    StudentDashboard,
    FacultyDashboard,
}

/// Per-tab session state machine.
///
/// Single-threaded and event-driven: every transition is triggered by one
/// user interaction, and while an authentication attempt is in flight all
/// other transitions are ignored (there is no cancellation path — the
/// attempt always runs to completion).
///
/// Owned by whoever drives the UI; nothing here is global, so independent
/// sessions never interfere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    selected_role: Option<Role>,
    pending: bool,
}

impl Session {
    /// A fresh session at the landing view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The view to present, derived from current state.
    pub fn view(&self) -> View {
        match (&self.identity, self.selected_role) {
            (Some(identity), _) => match identity.role {
                Role::Student => View::StudentDashboard,
                Role::Faculty => View::FacultyDashboard,
            },
            (None, Some(role)) => View::Login(role),
            (None, None) => View::Landing,
        }
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether an authentication attempt is currently in flight.
    pub fn attempt_pending(&self) -> bool {
        self.pending
    }

    /// Landing → Login: the user picked a role card.
    pub fn select_role(&mut self, role: Role) {
        if self.pending || self.identity.is_some() {
            return;
        }
        debug!(role = %role.as_str(), "role selected");
        self.selected_role = Some(role);
    }

    /// Start an authentication attempt from the login view.
    ///
    /// Returns `false` when the session is not on the login view or another
    /// attempt is already pending — duplicate submissions are rejected, not
    /// queued, so no two attempts are ever in flight at once.
    pub fn begin_attempt(&mut self) -> bool {
        if self.pending || !matches!(self.view(), View::Login(_)) {
            return false;
        }
        self.pending = true;
        true
    }

    /// Finish the pending attempt with the gate's outcome.
    ///
    /// On success the identity becomes the session's identity and the view
    /// follows *its* role — not the role picked on the landing page. On
    /// failure the session stays on the login view so the form can show the
    /// error and be resubmitted.
    pub fn complete_attempt(&mut self, outcome: &Result<Identity, AuthError>) {
        if !self.pending {
            return;
        }
        self.pending = false;
        if let Ok(identity) = outcome {
            debug!(username = %identity.username, "session authenticated");
            self.identity = Some(identity.clone());
            self.selected_role = None;
        }
    }

    /// Login → Landing without authenticating.
    pub fn back(&mut self) {
        if self.pending {
            return;
        }
        self.selected_role = None;
    }

    /// Clear the identity and return to the landing view.
    pub fn logout(&mut self) {
        if self.pending {
            return;
        }
        if let Some(identity) = self.identity.take() {
            debug!(username = %identity.username, "session cleared");
        }
        self.selected_role = None;
    }
}
