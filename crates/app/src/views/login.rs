use crate::state::use_session;
use auth::AuthGate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdEye, LdEyeOff, LdGraduationCap};
use dioxus_free_icons::Icon;
use shared_types::{LoginRequest, RegistrationRequest, Role};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, TabContent, TabList,
    TabTrigger, Tabs,
};

/// Sign-in page for the portal picked on the landing page.
///
/// The `role` prop only labels the form — the dashboard that follows a
/// successful sign-in is decided by the authenticated identity, never by
/// which card the user clicked.
#[component]
pub fn Login(role: Role) -> Element {
    let mut state = use_session();
    let gate = use_context::<AuthGate>();
    let register_gate = gate.clone();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let mut reg_username = use_signal(String::new);
    let mut reg_email = use_signal(String::new);
    let mut reg_password = use_signal(String::new);
    let mut reg_role = use_signal(String::new);
    let mut register_msg = use_signal(|| Option::<String>::None);

    let pending = state.attempt_pending();
    let password_type = if show_password() { "text" } else { "password" };

    let handle_login = move |evt: FormEvent| {
        let gate = gate.clone();
        async move {
            evt.prevent_default();
            // A second submit while one is in flight is dropped, not queued.
            if !state.begin_attempt() {
                return;
            }
            error_msg.set(None);

            let request = LoginRequest {
                username: username(),
                password: password(),
            };
            let outcome = gate.authenticate(&request).await;
            if let Err(err) = &outcome {
                error_msg.set(Some(err.message().to_string()));
            }
            state.complete_attempt(&outcome);
        }
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let request = RegistrationRequest {
            username: reg_username(),
            email: reg_email(),
            password: reg_password(),
            role: Role::parse(&reg_role()),
        };
        if let Err(err) = register_gate.register(&request) {
            register_msg.set(Some(err.message().to_string()));
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-panel",
                div { class: "login-brand",
                    Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 40, height: 40 }
                    h1 { "Kaksha" }
                    p { "Welcome to your classroom management system" }
                }

                Card { class: "login-card",
                    CardHeader {
                        CardTitle { "{role.display_name()} Portal" }
                        CardDescription { "Sign in with your demo credentials" }
                    }
                    CardContent {
                        Tabs { default_value: "login", horizontal: true,
                            TabList {
                                TabTrigger { value: "login", index: 0usize, "Login" }
                                TabTrigger { value: "register", index: 1usize, "Register" }
                            }

                            TabContent { value: "login", index: 0usize,
                                if let Some(err) = error_msg() {
                                    div { class: "login-error", "{err}" }
                                }

                                form { onsubmit: handle_login,
                                    div { class: "login-field",
                                        Label { html_for: "username", "Username" }
                                        Input {
                                            id: "username",
                                            placeholder: "Enter your username",
                                            value: username(),
                                            on_input: move |e: FormEvent| username.set(e.value()),
                                        }
                                    }
                                    div { class: "login-field",
                                        Label { html_for: "password", "Password" }
                                        Input {
                                            id: "password",
                                            input_type: "{password_type}",
                                            placeholder: "Enter your password",
                                            value: password(),
                                            on_input: move |e: FormEvent| password.set(e.value()),
                                            trailing: rsx! {
                                                button {
                                                    r#type: "button",
                                                    class: "password-toggle",
                                                    aria_label: "Toggle password visibility",
                                                    onclick: move |_| show_password.toggle(),
                                                    if show_password() {
                                                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                                    } else {
                                                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                                    }
                                                }
                                            },
                                        }
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "login-submit",
                                        disabled: pending,
                                        if pending { "Signing in..." } else { "Sign In" }
                                    }
                                }

                                div { class: "login-demo-box",
                                    p { class: "login-demo-title", "Demo Credentials" }
                                    p { "Student: student / student123" }
                                    p { "Faculty: teacher / teacher123" }
                                }
                            }

                            TabContent { value: "register", index: 1usize,
                                div { class: "login-advisory",
                                    "Account creation is currently disabled for this demo. "
                                    "Please use the provided demo credentials to explore the system."
                                }

                                if let Some(msg) = register_msg() {
                                    div { class: "login-error", "{msg}" }
                                }

                                form { onsubmit: handle_register,
                                    div { class: "login-field",
                                        Label { html_for: "reg-username", "Username" }
                                        Input {
                                            id: "reg-username",
                                            placeholder: "Choose a username",
                                            value: reg_username(),
                                            on_input: move |e: FormEvent| reg_username.set(e.value()),
                                        }
                                    }
                                    div { class: "login-field",
                                        Label { html_for: "reg-email", "Email" }
                                        Input {
                                            id: "reg-email",
                                            input_type: "email",
                                            placeholder: "you@example.com",
                                            value: reg_email(),
                                            on_input: move |e: FormEvent| reg_email.set(e.value()),
                                        }
                                    }
                                    div { class: "login-field",
                                        Label { html_for: "reg-password", "Password" }
                                        Input {
                                            id: "reg-password",
                                            input_type: "password",
                                            placeholder: "Choose a password",
                                            value: reg_password(),
                                            on_input: move |e: FormEvent| reg_password.set(e.value()),
                                        }
                                    }
                                    div { class: "login-field",
                                        Label { html_for: "reg-role", "Role" }
                                        select {
                                            id: "reg-role",
                                            class: "login-role-select",
                                            value: reg_role(),
                                            onchange: move |e: FormEvent| reg_role.set(e.value()),
                                            option { value: "", "Select a role" }
                                            option { value: "student", "Student" }
                                            option { value: "faculty", "Faculty" }
                                        }
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "login-submit",
                                        "Create Account"
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "login-back",
                    disabled: pending,
                    onclick: move |_| state.back(),
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back to Home"
                }
            }
        }
    }
}
