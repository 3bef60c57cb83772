pub mod faculty;
pub mod student;

pub use faculty::FacultyDashboard;
pub use student::StudentDashboard;

use crate::state::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_ui::theme::ThemeToggle;
use shared_ui::{Badge, BadgeVariant, PageActions, PageHeader, PageTitle};

/// Shared dashboard chrome: title, greeting, an identity badge, the theme
/// toggle, and the logout button.
#[component]
pub fn DashboardHeader(title: String, greeting: String, id_badge: String) -> Element {
    let mut state = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            div { class: "dashboard-heading",
                PageTitle { "{title}" }
                p { "{greeting}" }
            }
            PageActions {
                Badge { variant: BadgeVariant::Outline, "{id_badge}" }
                ThemeToggle {}
                button {
                    class: "dashboard-logout",
                    onclick: move |_| state.logout(),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }
        }
    }
}
