//! Profile Header Component
//!
//! Photo, name, title and outbound social links. Stateless.

use cloudfolio_core::{Profile, Section, SocialKind};
use dioxus::prelude::*;

use crate::components::{Icon, IconKind};

fn social_icon(kind: SocialKind) -> IconKind {
    match kind {
        SocialKind::LinkedIn => IconKind::LinkedIn,
        SocialKind::GitHub => IconKind::GitHub,
    }
}

fn social_class(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::LinkedIn => "social-link social-link--linkedin",
        SocialKind::GitHub => "social-link social-link--github",
    }
}

#[component]
pub fn ProfileHeader(profile: Profile) -> Element {
    rsx! {
        section {
            id: Section::Profile.anchor(),
            class: "page-anchor profile-header",
            div { class: "profile-header__body enter-fade-down",
                img {
                    class: "profile-header__photo",
                    src: "{profile.photo_ref}",
                    alt: "{profile.photo_alt}",
                }
                h1 { class: "profile-header__name", "{profile.name}" }
                h4 { class: "profile-header__title enter-fade-up", "{profile.title}" }

                div { class: "profile-header__socials",
                    for link in profile.socials.iter() {
                        a {
                            key: "{link.url}",
                            class: social_class(link.kind),
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.aria_label}",
                            Icon { kind: social_icon(link.kind), size: 28 }
                        }
                    }
                }
            }
        }
    }
}
