//! Certification Gallery Component
//!
//! Badge images in source order, each linking to its verification page in a
//! new browsing context. The `href` is the entry's link, untouched.

use cloudfolio_core::{CertificationEntry, Section};
use dioxus::prelude::*;

use crate::components::{IconKind, SectionHeading};

/// Badge gallery.
///
/// An empty list still renders the heading, followed by an empty gallery.
/// Missing badge files fall back to the browser's alt-text rendering.
#[component]
pub fn CertificationGallery(entries: Vec<CertificationEntry>) -> Element {
    rsx! {
        section {
            id: Section::Certifications.anchor(),
            class: "page-anchor content-row__cell",
            SectionHeading { icon: IconKind::Award, title: Section::Certifications.heading() }

            div { class: "cert-gallery",
                for (index, cert) in entries.iter().enumerate() {
                    a {
                        key: "{index}",
                        href: "{cert.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        img {
                            class: "cert-badge",
                            src: "{cert.image_ref}",
                            alt: "{cert.alt_text}",
                        }
                    }
                }
            }
        }
    }
}
