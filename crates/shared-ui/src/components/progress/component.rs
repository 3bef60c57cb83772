use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Attendance bar on the subject cards. `value` is the percentage shown;
/// pair with a [`ProgressIndicator`] child for the filled track.
#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

/// Filled portion of a [`Progress`] bar.
#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}
