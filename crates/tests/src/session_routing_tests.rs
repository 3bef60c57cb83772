use auth::{Session, View};
use pretty_assertions::assert_eq;
use shared_types::{Identity, Role};

use crate::common;

fn faculty_identity() -> Identity {
    Identity {
        username: "teacher".to_string(),
        role: Role::Faculty,
    }
}

#[test]
fn test_view_is_a_function_of_session_state() {
    // Two sessions walked through the same transitions present the same view
    // at every step.
    let mut a = Session::new();
    let mut b = Session::new();
    assert_eq!(a.view(), b.view());

    a.select_role(Role::Faculty);
    b.select_role(Role::Faculty);
    assert_eq!(a.view(), b.view());

    assert!(a.begin_attempt());
    assert!(b.begin_attempt());
    a.complete_attempt(&Ok(faculty_identity()));
    b.complete_attempt(&Ok(faculty_identity()));
    assert_eq!(a.view(), View::FacultyDashboard);
    assert_eq!(a.view(), b.view());
}

#[test]
fn test_no_dashboard_without_an_identity() {
    let mut session = Session::new();
    assert_eq!(session.view(), View::Landing);

    session.select_role(Role::Student);
    assert!(matches!(session.view(), View::Login(_)));

    session.back();
    session.select_role(Role::Faculty);
    assert!(matches!(session.view(), View::Login(_)));
    // No sequence of selection and back-navigation alone reaches a dashboard.
}

#[test]
fn test_back_is_blocked_while_an_attempt_is_pending() {
    let mut session = Session::new();
    session.select_role(Role::Student);
    assert!(session.begin_attempt());

    session.back();
    assert_eq!(session.view(), View::Login(Role::Student));
    assert!(session.attempt_pending());
}

#[tokio::test]
async fn test_pending_attempt_blocks_a_second_submission() {
    let gate = common::demo_gate();
    let mut session = Session::new();
    session.select_role(Role::Student);

    assert!(session.begin_attempt());
    // The UI drops this one instead of queueing it.
    assert!(!session.begin_attempt());

    let outcome = gate.authenticate(&common::creds("student", "student123")).await;
    session.complete_attempt(&outcome);
    assert_eq!(session.view(), View::StudentDashboard);
    assert!(!session.attempt_pending());
}

#[test]
fn test_reload_semantics_nothing_survives_a_new_session() {
    // A page reload constructs a fresh session; identity is never persisted.
    let mut session = Session::new();
    session.select_role(Role::Faculty);
    assert!(session.begin_attempt());
    session.complete_attempt(&Ok(faculty_identity()));
    assert_eq!(session.view(), View::FacultyDashboard);

    let reloaded = Session::new();
    assert_eq!(reloaded.view(), View::Landing);
    assert!(reloaded.identity().is_none());
}
