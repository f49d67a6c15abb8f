//! Profile - the page owner's identity shown in the header

use serde::{Deserialize, Serialize};

/// Outbound social network shown under the profile photo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    #[default]
    LinkedIn,
    GitHub,
}

impl SocialKind {
    /// Text used when a link carries no explicit label
    pub fn display_name(&self) -> &'static str {
        match self {
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
    /// Accessible name for the icon-only link
    pub aria_label: String,
}

impl SocialLink {
    pub fn new(kind: SocialKind, url: &str) -> Self {
        Self {
            kind,
            url: url.to_string(),
            aria_label: format!("{} Profile", kind.display_name()),
        }
    }
}

/// Header and intro content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Professional title under the name
    pub title: String,
    /// Relative path of the profile photo
    pub photo_ref: String,
    pub photo_alt: String,
    /// Banner heading above the intro
    pub tagline: String,
    /// Intro paragraph; the name is rendered in bold in front of it
    pub intro: String,
    pub socials: Vec<SocialLink>,
}
