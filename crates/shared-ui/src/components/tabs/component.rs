use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

/// Tabbed panels used on the login form (Login / Register) and the
/// dashboards (subjects / assignments / schedule).
#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

/// Row of [`TabTrigger`] buttons.
#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

/// Selector for one tab; `value` must match the paired [`TabContent`].
#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-trigger".to_string());
    }

    rsx! {
        prim::TabTrigger { ..props }
    }
}

/// Panel shown while its `value` is the selected tab.
#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}
