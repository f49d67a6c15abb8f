//! Navigation Bar Component
//!
//! Sticky top bar with in-page anchor links. Target sections carry
//! `scroll-margin-top` so they land below the bar instead of under it.

use cloudfolio_core::Section;
use dioxus::prelude::*;

/// Sections reachable from the navigation bar, in link order
pub const NAV_SECTIONS: [Section; 4] = [
    Section::Profile,
    Section::Certifications,
    Section::Toolbox,
    Section::Career,
];

/// Short link text for a section
fn nav_label(section: Section) -> &'static str {
    match section {
        Section::Career => "Career",
        other => other.heading(),
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "nav-bar", "aria-label": "Page sections",
            for section in NAV_SECTIONS {
                {
                    let anchor = section.anchor();
                    let label = nav_label(section);
                    rsx! {
                        a {
                            key: "{anchor}",
                            class: "nav-bar__link",
                            href: "#{anchor}",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_labels() {
        let labels: Vec<_> = NAV_SECTIONS.iter().map(|s| nav_label(*s)).collect();
        assert_eq!(labels, vec!["Profile", "Certifications", "Tech Toolbox", "Career"]);
    }

    #[test]
    fn nav_anchors_in_link_order() {
        let anchors: Vec<_> = NAV_SECTIONS.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["profile", "certifications", "toolbox", "career"]);
    }
}
