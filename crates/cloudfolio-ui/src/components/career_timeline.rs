//! Career Timeline Component
//!
//! Used for both the career and the education history. Each row has a meta
//! column (title, organization, date range) next to a card holding the
//! description, any project highlights, and the bullet list.

use cloudfolio_core::{CareerEntry, Section};
use dioxus::prelude::*;

use crate::components::{IconKind, SectionHeading};

#[component]
pub fn CareerTimeline(
    /// Which history this is; sets the anchor id and heading
    section: Section,
    icon: IconKind,
    /// Rows in display order
    entries: Vec<CareerEntry>,
) -> Element {
    rsx! {
        section {
            id: section.anchor(),
            class: "page-anchor career-timeline",
            SectionHeading { icon: icon, title: section.heading(), spacious: true }

            for (index, entry) in entries.iter().enumerate() {
                CareerItem { key: "{index}", entry: entry.clone() }
            }
        }
    }
}

/// One timeline row
#[component]
pub fn CareerItem(entry: CareerEntry) -> Element {
    rsx! {
        div { class: "career-item",
            div { class: "career-item__meta",
                div { class: "career-item__title", "{entry.title}" }
                div { class: "career-item__caption",
                    "{entry.organization}"
                    br {}
                    "{entry.date_range}"
                }
            }

            div { class: "career-card",
                div { class: "career-card__description", "{entry.description}" }

                for project in entry.projects.iter() {
                    div { class: "career-project",
                        div { class: "career-project__name {project.accent_class}", "{project.name}" }
                        ul { class: "bullet-list",
                            for bullet in project.bullets.iter() {
                                li { "{bullet}" }
                            }
                        }
                    }
                }

                if !entry.bullets.is_empty() {
                    ul { class: "bullet-list",
                        for bullet in entry.bullets.iter() {
                            li { "{bullet}" }
                        }
                    }
                }
            }
        }
    }
}
