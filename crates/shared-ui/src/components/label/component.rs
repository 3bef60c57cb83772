use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form label used above the login inputs. Passes `html_for` and the rest
/// of the primitive's props straight through.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
