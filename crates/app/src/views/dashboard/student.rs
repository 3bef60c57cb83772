use crate::views::dashboard::DashboardHeader;
use crate::{demo_data, stats};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBookOpen, LdCalendar, LdClock, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::AssignmentStatus;
use shared_ui::{
    Badge, BadgeVariant, Progress, ProgressIndicator, TabContent, TabList, TabTrigger, Tabs,
};

fn status_variant(status: AssignmentStatus) -> BadgeVariant {
    match status {
        AssignmentStatus::Pending => BadgeVariant::Warning,
        AssignmentStatus::Submitted => BadgeVariant::Secondary,
        AssignmentStatus::Graded => BadgeVariant::Accent,
    }
}

#[component]
pub fn StudentDashboard() -> Element {
    let profile = demo_data::student_profile();
    let subjects = demo_data::student_subjects();
    let assignments = demo_data::student_assignments();
    let schedule = demo_data::student_schedule();

    let overall = stats::overall_attendance(&subjects);
    let pending = stats::pending_count(&assignments);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "dashboard-page",
            DashboardHeader {
                title: "Student Dashboard",
                greeting: "Welcome back, {profile.name}",
                id_badge: "{profile.roll_number} \u{b7} {profile.semester} \u{b7} {profile.branch}",
            }

            div { class: "dashboard-stats",
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{overall}%" }
                        div { class: "stat-label", "Overall Attendance" }
                    }
                }
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{subjects.len()}" }
                        div { class: "stat-label", "Enrolled Subjects" }
                    }
                }
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{pending}" }
                        div { class: "stat-label", "Pending Assignments" }
                    }
                }
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{schedule.len()}" }
                        div { class: "stat-label", "Classes Today" }
                    }
                }
            }

            Tabs { default_value: "subjects", horizontal: true,
                TabList {
                    TabTrigger { value: "subjects", index: 0usize, "Subjects" }
                    TabTrigger { value: "assignments", index: 1usize, "Assignments" }
                    TabTrigger { value: "schedule", index: 2usize, "Schedule" }
                }

                TabContent { value: "subjects", index: 0usize,
                    div { class: "dashboard-list",
                        for subject in subjects {
                            div { key: "{subject.code}", class: "list-row subject-row",
                                div { class: "list-row-main",
                                    div { class: "list-row-title", "{subject.name}" }
                                    div { class: "list-row-sub",
                                        "{subject.code} \u{b7} {subject.instructor}"
                                    }
                                    div { class: "subject-progress",
                                        Progress {
                                            value: Some(subject.attendance.percentage() as f64),
                                            ProgressIndicator {}
                                        }
                                    }
                                }
                                div { class: "list-row-side",
                                    span { class: "subject-classes",
                                        "{subject.attendance.attended}/{subject.attendance.held} classes"
                                    }
                                    Badge {
                                        variant: stats::attendance_variant(subject.attendance.percentage()),
                                        "{subject.attendance.percentage()}%"
                                    }
                                }
                            }
                        }
                    }
                }

                TabContent { value: "assignments", index: 1usize,
                    div { class: "dashboard-list",
                        for assignment in assignments {
                            div { key: "{assignment.title}", class: "list-row",
                                div { class: "list-row-main",
                                    div { class: "list-row-title", "{assignment.title}" }
                                    div { class: "list-row-sub",
                                        "{assignment.subject} \u{b7} Due: {assignment.due}"
                                    }
                                }
                                div { class: "list-row-side",
                                    Badge {
                                        variant: status_variant(assignment.status),
                                        "{assignment.status.label()}"
                                    }
                                }
                            }
                        }
                    }
                }

                TabContent { value: "schedule", index: 2usize,
                    div { class: "dashboard-list",
                        for slot in schedule {
                            div { key: "{slot.time}", class: "list-row",
                                div { class: "list-row-main",
                                    div { class: "list-row-title", "{slot.subject}" }
                                    div { class: "list-row-sub", "{slot.time} \u{b7} {slot.room}" }
                                }
                                div { class: "list-row-side",
                                    Badge { variant: BadgeVariant::Outline, "{slot.kind.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
