use pretty_assertions::assert_eq;
use shared_types::{AuthErrorKind, RegistrationRequest, Role, REGISTRATION_DISABLED_MESSAGE};

use crate::common;

#[tokio::test]
async fn test_registration_is_rejected_with_the_disabled_message() {
    let gate = common::demo_gate();
    let request = RegistrationRequest {
        username: "newstudent".to_string(),
        email: "new@example.edu".to_string(),
        password: "password1".to_string(),
        role: Some(Role::Student),
    };

    let err = gate.register(&request).unwrap_err();
    assert_eq!(err.kind, AuthErrorKind::RegistrationDisabled);
    assert_eq!(err.message(), REGISTRATION_DISABLED_MESSAGE);
}

#[tokio::test]
async fn test_registration_rejects_any_input_identically() {
    let gate = common::demo_gate();

    let empty = gate.register(&RegistrationRequest::default()).unwrap_err();
    let full = gate
        .register(&RegistrationRequest {
            username: "teacher".to_string(),
            email: "teacher@example.edu".to_string(),
            password: "teacher123".to_string(),
            role: Some(Role::Faculty),
        })
        .unwrap_err();
    assert_eq!(empty, full);
}

#[tokio::test]
async fn test_registration_never_adds_an_account() {
    let gate = common::demo_gate();
    assert_eq!(gate.store().len(), 2);

    let _ = gate.register(&RegistrationRequest {
        username: "ghost".to_string(),
        email: "ghost@example.edu".to_string(),
        password: "boo".to_string(),
        role: None,
    });

    assert_eq!(gate.store().len(), 2);
    // And the rejected username still cannot sign in.
    assert!(gate
        .authenticate(&common::creds("ghost", "boo"))
        .await
        .is_err());
}
