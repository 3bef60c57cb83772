use dioxus::prelude::*;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, Label,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_badge_renders_variant_attribute() {
    let html = render(|| {
        rsx! {
            Badge { variant: BadgeVariant::Warning, "69%" }
        }
    });
    assert!(html.contains("data-style=\"warning\""));
    assert!(html.contains("69%"));
}

#[test]
fn test_button_renders_disabled_state() {
    let html = render(|| {
        rsx! {
            Button { variant: ButtonVariant::Primary, disabled: true, "Sign In" }
        }
    });
    assert!(html.contains("disabled"));
    assert!(html.contains("Sign In"));
}

#[test]
fn test_card_composition_renders_all_sections() {
    let html = render(|| {
        rsx! {
            Card {
                CardHeader {
                    CardTitle { "Student Portal" }
                    CardDescription { "Track attendance and assignments" }
                }
                CardContent { "body" }
            }
        }
    });
    assert!(html.contains("Student Portal"));
    assert!(html.contains("Track attendance and assignments"));
    assert!(html.contains("body"));
}

#[test]
fn test_input_renders_trailing_slot() {
    let html = render(|| {
        rsx! {
            Label { html_for: "password", "Password" }
            Input {
                id: "password",
                input_type: "password",
                placeholder: "Enter your password",
                trailing: rsx! {
                    button { r#type: "button", class: "password-toggle", "show" }
                },
            }
        }
    });
    assert!(html.contains("type=\"password\""));
    assert!(html.contains("input-trailing"));
    assert!(html.contains("password-toggle"));
}
