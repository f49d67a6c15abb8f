//! Section heading with a leading icon

use dioxus::prelude::*;

use crate::components::{Icon, IconKind};

#[component]
pub fn SectionHeading(
    icon: IconKind,
    title: &'static str,
    /// Larger gap below the heading, for the timeline sections
    #[props(default = false)]
    spacious: bool,
) -> Element {
    rsx! {
        h2 {
            class: if spacious { "section-heading section-heading--spacious" } else { "section-heading" },
            Icon { kind: icon }
            "{title}"
        }
    }
}
