//! Certification Entry - an external credential badge

use serde::{Deserialize, Serialize};

/// A credential badge with an outbound verification link.
///
/// `link` is stored exactly as authored. It is never parsed or normalised,
/// so the rendered `href` is always the literal source string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    /// Relative path of the badge image
    pub image_ref: String,
    /// Alternative text, also what remains when the image is missing
    pub alt_text: String,
    /// Verification URL
    pub link: String,
}

impl CertificationEntry {
    pub fn new(image_ref: &str, alt_text: &str, link: &str) -> Self {
        Self {
            image_ref: image_ref.to_string(),
            alt_text: alt_text.to_string(),
            link: link.to_string(),
        }
    }
}
