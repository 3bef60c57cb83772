use auth::{Session, View};
use pretty_assertions::assert_eq;
use shared_types::{Role, INVALID_CREDENTIALS_MESSAGE};

use crate::common;

#[tokio::test]
async fn test_student_login_reaches_student_dashboard() {
    let gate = common::demo_gate();
    let mut session = Session::new();

    session.select_role(Role::Student);
    assert_eq!(session.view(), View::Login(Role::Student));

    let outcome = common::attempt_login(&mut session, &gate, "student", "student123").await;
    assert!(outcome.is_ok());
    assert_eq!(session.view(), View::StudentDashboard);
    assert_eq!(session.identity().unwrap().username, "student");
    assert_eq!(session.identity().unwrap().role, Role::Student);
}

#[tokio::test]
async fn test_faculty_login_reaches_faculty_dashboard() {
    let gate = common::demo_gate();
    let mut session = Session::new();

    session.select_role(Role::Faculty);
    let outcome = common::attempt_login(&mut session, &gate, "teacher", "teacher123").await;
    assert!(outcome.is_ok());
    assert_eq!(session.view(), View::FacultyDashboard);
}

#[tokio::test]
async fn test_failed_login_keeps_the_form_and_shows_the_generic_message() {
    let gate = common::demo_gate();
    let mut session = Session::new();

    session.select_role(Role::Student);
    let outcome = common::attempt_login(&mut session, &gate, "student", "wrong").await;
    assert_eq!(outcome.unwrap_err().message(), INVALID_CREDENTIALS_MESSAGE);
    assert_eq!(session.view(), View::Login(Role::Student));
    assert!(session.identity().is_none());
}

#[tokio::test]
async fn test_unknown_user_fails_like_a_wrong_password() {
    let gate = common::demo_gate();
    let wrong = gate
        .authenticate(&common::creds("student", "nope"))
        .await
        .unwrap_err();
    let unknown = gate
        .authenticate(&common::creds("admin", "admin"))
        .await
        .unwrap_err();
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn test_dashboard_follows_credentials_not_the_portal_card() {
    // Picked the student portal but signed in with faculty credentials.
    let gate = common::demo_gate();
    let mut session = Session::new();

    session.select_role(Role::Student);
    let outcome = common::attempt_login(&mut session, &gate, "teacher", "teacher123").await;
    assert!(outcome.is_ok());
    assert_eq!(session.view(), View::FacultyDashboard);
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let gate = common::demo_gate();
    let mut session = Session::new();

    session.select_role(Role::Faculty);
    common::attempt_login(&mut session, &gate, "teacher", "oops")
        .await
        .unwrap_err();
    common::attempt_login(&mut session, &gate, "teacher", "teacher123")
        .await
        .unwrap();
    assert_eq!(session.view(), View::FacultyDashboard);
}

#[tokio::test]
async fn test_logout_returns_to_landing_and_clears_identity() {
    let gate = common::demo_gate();
    let mut session = Session::new();

    session.select_role(Role::Student);
    common::attempt_login(&mut session, &gate, "student", "student123")
        .await
        .unwrap();
    session.logout();
    assert_eq!(session.view(), View::Landing);
    assert!(session.identity().is_none());

    // The whole flow works again from scratch.
    session.select_role(Role::Faculty);
    common::attempt_login(&mut session, &gate, "teacher", "teacher123")
        .await
        .unwrap();
    assert_eq!(session.view(), View::FacultyDashboard);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let gate = common::demo_gate();
    let mut first = Session::new();
    let mut second = Session::new();

    first.select_role(Role::Student);
    common::attempt_login(&mut first, &gate, "student", "student123")
        .await
        .unwrap();

    // The second session is unaffected by the first one's identity.
    assert_eq!(second.view(), View::Landing);
    second.select_role(Role::Faculty);
    assert_eq!(second.view(), View::Login(Role::Faculty));
    assert_eq!(first.view(), View::StudentDashboard);
}
