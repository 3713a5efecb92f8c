use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

use crate::components::label::Label;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// A switch with its label on the left, for boolean settings.
#[component]
pub fn LabeledSwitch(
    id: String,
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "labeled-switch",
            Label { html_for: id.clone(), "{label}" }
            Switch {
                id: id,
                checked: Some(checked),
                disabled: disabled,
                on_checked_change: move |val: bool| on_change.call(val),
                SwitchThumb {}
            }
        }
    }
}
