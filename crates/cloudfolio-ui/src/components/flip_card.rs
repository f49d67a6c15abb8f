//! Flip Card Component
//!
//! A two-sided tile: icon and label on the front, the entry's value on the
//! back. The card is controlled; its face comes from the owning deck and every
//! activation is reported back as a [`FlipTrigger`].

use cloudfolio_core::{FlipFace, FlipTrigger, ToolboxEntry};
use dioxus::prelude::*;

/// Properties for the FlipCard component
#[derive(Clone, PartialEq, Props)]
pub struct FlipCardProps {
    /// Entry shown on the two faces
    pub entry: ToolboxEntry,
    /// Currently visible face
    #[props(default)]
    pub face: FlipFace,
    /// Called on pointer click, Enter or Space
    pub on_activate: EventHandler<FlipTrigger>,
}

/// Interactive flip tile.
///
/// # Design Notes
///
/// - Exposed as a toggle button: `role="button"`, `aria-pressed` mirrors the
///   face, focusable with `tabindex="0"`
/// - Enter and Space activate like a click; Space skips the page scroll
/// - The outer element carries the `perspective` class whose rule is
///   registered once in the document head by the bootstrap
///
/// # Example
///
/// ```rust,ignore
/// let mut face = use_signal(FlipFace::default);
///
/// rsx! {
///     FlipCard {
///         entry: entry.clone(),
///         face: face(),
///         on_activate: move |trigger: FlipTrigger| face.set(trigger.apply(face())),
///     }
/// }
/// ```
#[component]
pub fn FlipCard(props: FlipCardProps) -> Element {
    let entry = &props.entry;
    let face = props.face;
    let rotation = face.rotation_deg();
    let on_activate = props.on_activate;

    rsx! {
        div {
            class: "perspective flip-card",
            role: "button",
            tabindex: "0",
            "aria-pressed": face.aria_pressed(),
            onclick: move |_| on_activate.call(FlipTrigger::Click),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(trigger) = FlipTrigger::from_key(&evt.key().to_string()) {
                    if trigger == FlipTrigger::Space {
                        evt.prevent_default();
                    }
                    on_activate.call(trigger);
                }
            },
            div {
                class: "flip-card__tile {entry.color_class}",
                style: "transform: rotateY({rotation}deg);",
                div { class: "flip-card__face flip-card__face--front",
                    span { class: "flip-card__icon", "{entry.icon}" }
                    span { class: "flip-card__label", "{entry.label}" }
                }
                div { class: "flip-card__face flip-card__face--back",
                    span { class: "flip-card__value", "{entry.value}" }
                }
            }
        }
    }
}
