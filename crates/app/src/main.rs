use std::time::Duration;

use auth::{AuthGate, CredentialStore, View};
use dioxus::prelude::*;
use shared_ui::theme::{ThemeMode, ThemeSeed, ThemeState};

mod demo_data;
mod state;
mod stats;
mod views;

use state::{use_session, SessionState};
use views::dashboard::{FacultyDashboard, StudentDashboard};
use views::landing::Landing;
use views::login::Login;

/// Simulated network round-trip for the interactive login. Tests construct
/// their own zero-latency gate instead.
const LOGIN_LATENCY: Duration = Duration::from_secs(1);

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Top-level component: provides session, gate, and theme contexts, then
/// presents whichever view the session derives.
///
/// The view is a pure function of session state — there is no separately
/// settable "current screen", so a dashboard can only ever appear while
/// the session holds an identity with that role.
#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);
    use_context_provider(|| AuthGate::with_latency(CredentialStore::demo(), LOGIN_LATENCY));
    use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::default()),
    });

    let state = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ThemeSeed {}
        match state.view() {
            View::Landing => rsx! { Landing {} },
            View::Login(role) => rsx! { Login { role } },
            View::StudentDashboard => rsx! { StudentDashboard {} },
            View::FacultyDashboard => rsx! { FacultyDashboard {} },
        }
    }
}
