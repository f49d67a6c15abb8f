//! The portfolio page.
//!
//! Composition only: navigation, profile header, banner and intro, then the
//! toolbox and certifications side by side, the career and education
//! timelines, and the footer.

use cloudfolio_core::{Portfolio, Section};
use dioxus::prelude::*;

use crate::components::{
    current_year, CareerTimeline, CertificationGallery, FloatingClouds, Icon, IconKind, NavBar,
    ProfileHeader, SiteFooter, ToolboxGrid,
};

#[derive(Clone, PartialEq, Props)]
pub struct PortfolioPageProps {
    pub portfolio: Portfolio,
    /// Copyright year; the local clock's year when unset
    #[props(default)]
    pub year: Option<i32>,
}

#[component]
pub fn PortfolioPage(props: PortfolioPageProps) -> Element {
    let portfolio = &props.portfolio;
    let profile = &portfolio.profile;
    let year = props.year.unwrap_or_else(current_year);

    rsx! {
        div { class: "page-shell",
            FloatingClouds {}
            NavBar {}
            ProfileHeader { profile: profile.clone() }

            div { class: "page-body",
                header { class: "banner",
                    h1 { class: "banner__title enter-fade-slow",
                        Icon { kind: IconKind::Cloud, size: 32 }
                        "{profile.tagline}"
                    }
                }

                section { class: "intro",
                    p {
                        "Hello! I'm "
                        strong { "{profile.name}" }
                        ", {profile.intro}"
                    }
                }

                hr { class: "divider" }

                div { class: "content-column",
                    div { class: "content-row",
                        ToolboxGrid { entries: portfolio.toolbox.clone() }
                        CertificationGallery { entries: portfolio.certifications.clone() }
                    }

                    CareerTimeline {
                        section: Section::Career,
                        icon: IconKind::Briefcase,
                        entries: portfolio.career.clone(),
                    }
                    CareerTimeline {
                        section: Section::Education,
                        icon: IconKind::GraduationCap,
                        entries: portfolio.education.clone(),
                    }
                }

                SiteFooter { name: profile.name.clone(), year: year }
            }
        }
    }
}
