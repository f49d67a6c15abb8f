//! Toolbox Grid Component
//!
//! Renders one [`FlipCard`] per toolbox entry. The grid owns the
//! [`FlipDeck`], so each card's face lives at the card's index and toggling
//! one card cannot reach another.
//!
//! The deck follows the entry count lazily: an activation first grows it to
//! the current `entries.len()`, so cards added after mount flip too. It never
//! shrinks; faces past the last entry are simply not rendered.

use cloudfolio_core::{FlipDeck, FlipTrigger, Section, ToolboxEntry};
use dioxus::prelude::*;

use crate::components::{FlipCard, IconKind, SectionHeading};

#[component]
pub fn ToolboxGrid(entries: Vec<ToolboxEntry>) -> Element {
    let card_count = entries.len();
    let mut deck = use_signal(move || FlipDeck::new(card_count));

    rsx! {
        section {
            id: Section::Toolbox.anchor(),
            class: "page-anchor content-row__cell",
            SectionHeading { icon: IconKind::Wrench, title: Section::Toolbox.heading() }

            div { class: "toolbox-grid",
                for (index, entry) in entries.iter().enumerate() {
                    FlipCard {
                        key: "{index}",
                        entry: entry.clone(),
                        face: deck.read().face(index).unwrap_or_default(),
                        on_activate: move |trigger: FlipTrigger| {
                            let mut faces = deck.write();
                            let len = faces.len().max(card_count);
                            faces.resize(len);
                            faces.apply(index, trigger);
                        },
                    }
                }
            }
        }
    }
}
