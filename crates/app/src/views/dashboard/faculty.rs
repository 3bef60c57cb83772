use crate::views::dashboard::DashboardHeader;
use crate::{demo_data, stats};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdClock, LdFileText, LdPlus, LdTrendingUp, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    Separator, TabContent, TabList, TabTrigger, Tabs,
};

#[component]
pub fn FacultyDashboard() -> Element {
    let profile = demo_data::faculty_profile();
    let subjects = demo_data::teaching_subjects();
    let assignments = demo_data::faculty_assignments();
    let schedule = demo_data::faculty_schedule();
    let activity = demo_data::recent_activity();
    let summary = demo_data::monthly_summary();

    let students = stats::total_students(&subjects);
    let avg_attendance = stats::average_class_attendance(&subjects);
    let pending_grading = stats::total_pending_grading(&subjects);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./faculty.css") }

        div { class: "dashboard-page",
            DashboardHeader {
                title: "Faculty Dashboard",
                greeting: "Welcome back, {profile.name}",
                id_badge: "{profile.employee_id} \u{b7} {profile.department}",
            }

            div { class: "dashboard-stats",
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{students}" }
                        div { class: "stat-label", "Total Students" }
                    }
                }
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{subjects.len()}" }
                        div { class: "stat-label", "Subjects Taught" }
                    }
                }
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{avg_attendance}%" }
                        div { class: "stat-label", "Avg Attendance" }
                    }
                }
                div { class: "stat-card",
                    div { class: "stat-icon",
                        Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                    }
                    div {
                        div { class: "stat-value", "{pending_grading}" }
                        div { class: "stat-label", "Pending Grading" }
                    }
                }
            }

            div { class: "faculty-actions",
                Button { variant: ButtonVariant::Primary,
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                    "Mark Attendance"
                }
                Button { variant: ButtonVariant::Outline,
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Create Assignment"
                }
                Button { variant: ButtonVariant::Outline,
                    Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                    "Upload Material"
                }
            }

            div { class: "dashboard-columns",
                div {
                    Tabs { default_value: "subjects", horizontal: true,
                        TabList {
                            TabTrigger { value: "subjects", index: 0usize, "My Subjects" }
                            TabTrigger { value: "assignments", index: 1usize, "Assignments" }
                        }

                        TabContent { value: "subjects", index: 0usize,
                            div { class: "dashboard-list",
                                for subject in subjects {
                                    div { key: "{subject.code}", class: "list-row",
                                        div { class: "list-row-main",
                                            div { class: "list-row-title", "{subject.name}" }
                                            div { class: "list-row-sub",
                                                "{subject.code} \u{b7} {subject.semester} Sem \u{b7} "
                                                "{subject.students} students \u{b7} "
                                                "{subject.total_classes} classes"
                                            }
                                        }
                                        div { class: "list-row-side",
                                            if subject.pending_grading > 0 {
                                                span { class: "faculty-grading-note",
                                                    "{subject.pending_grading} to grade"
                                                }
                                            }
                                            Badge {
                                                variant: stats::attendance_variant(subject.avg_attendance),
                                                "{subject.avg_attendance}%"
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
                                                variant: if assignment.pending_reviews == 0 {
                                                    BadgeVariant::Accent
                                                } else {
                                                    BadgeVariant::Warning
                                                },
                                                "{assignment.review_label()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                aside { class: "dashboard-sidebar",
                    Card {
                        CardHeader {
                            CardTitle {
                                Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                "Today's Schedule"
                            }
                        }
                        CardContent {
                            div { class: "faculty-schedule",
                                for slot in schedule {
                                    div { key: "{slot.time}", class: "faculty-schedule-slot",
                                        div { class: "faculty-schedule-time", "{slot.time}" }
                                        div {
                                            div { class: "list-row-title", "{slot.subject}" }
                                            div { class: "list-row-sub",
                                                "{slot.room} \u{b7} {slot.kind.label()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle {
                                Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                                "Recent Activity"
                            }
                        }
                        CardContent {
                            div { class: "faculty-activity",
                                for entry in activity {
                                    div { key: "{entry.action}-{entry.subject}", class: "faculty-activity-entry",
                                        div { class: "list-row-title", "{entry.action}" }
                                        div { class: "list-row-sub",
                                            "{entry.subject} \u{b7} {entry.time_ago}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "This Month" }
                        }
                        CardContent {
                            div { class: "faculty-summary-row",
                                span { "Classes Conducted" }
                                span { class: "faculty-summary-value", "{summary.classes_conducted}" }
                            }
                            Separator {}
                            div { class: "faculty-summary-row",
                                span { "Assignments Created" }
                                span { class: "faculty-summary-value", "{summary.assignments_created}" }
                            }
                            Separator {}
                            div { class: "faculty-summary-row",
                                span { "Average Attendance" }
                                span { class: "faculty-summary-value", "{summary.average_attendance}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
