use crate::state::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdCalendar, LdFileText, LdGraduationCap, LdTrendingUp, LdUserCheck,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::theme::ThemeToggle;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Role selection page shown to anyone without an identity.
///
/// Picking a portal only records a role preference; the actual role comes
/// from the credentials at sign-in.
#[component]
pub fn Landing() -> Element {
    let mut state = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            header { class: "landing-topbar",
                div { class: "landing-brand",
                    Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 28, height: 28 }
                    span { "Kaksha" }
                }
                ThemeToggle {}
            }

            section { class: "landing-hero",
                h1 { "Kaksha" }
                p { class: "landing-tagline", "Welcome to your classroom management system" }
                p { class: "landing-description",
                    "Modern classroom management system with integrated attendance tracking, "
                    "homework assignments, and seamless communication between students and faculty."
                }
                div { class: "landing-capabilities",
                    Badge { variant: BadgeVariant::Secondary, "Attendance Tracking" }
                    Badge { variant: BadgeVariant::Secondary, "Homework Management" }
                    Badge { variant: BadgeVariant::Secondary, "Student-Faculty Communication" }
                }
            }

            div { class: "landing-portals",
                Card { class: "portal-card",
                    CardHeader {
                        div { class: "portal-icon portal-icon-student",
                            Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 32, height: 32 }
                        }
                        CardTitle { "Student Portal" }
                        CardDescription {
                            "View your attendance, track assignments, and stay on top of your schedule."
                        }
                    }
                    CardContent {
                        ul { class: "portal-features",
                            li {
                                Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                                "Subject-wise attendance overview"
                            }
                            li {
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 16, height: 16 }
                                "Assignment deadlines and status"
                            }
                            li {
                                Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                                "Daily class schedule"
                            }
                        }
                        button {
                            class: "portal-continue",
                            onclick: move |_| state.select_role(Role::Student),
                            "Continue as Student"
                        }
                    }
                }

                Card { class: "portal-card",
                    CardHeader {
                        div { class: "portal-icon portal-icon-faculty",
                            Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 }
                        }
                        CardTitle { "Faculty Portal" }
                        CardDescription {
                            "Manage your classes, mark attendance, and review student submissions."
                        }
                    }
                    CardContent {
                        ul { class: "portal-features",
                            li {
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                                "Mark and review attendance"
                            }
                            li {
                                Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                                "Create and grade assignments"
                            }
                            li {
                                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 16, height: 16 }
                                "Class performance at a glance"
                            }
                        }
                        button {
                            class: "portal-continue",
                            onclick: move |_| state.select_role(Role::Faculty),
                            "Continue as Faculty"
                        }
                    }
                }
            }
        }
    }
}
