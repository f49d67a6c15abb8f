//! Portfolio - the complete content of the page
//!
//! Content is loaded once (canonical literal data or a JSON file) and never
//! mutated afterwards. Display order is source order.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::types::{CareerEntry, CertificationEntry, Profile, ToolboxEntry};

/// Addressable page section.
///
/// Each section renders with `id = anchor()` so in-page links resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Certifications,
    Toolbox,
    Career,
    Education,
}

impl Section {
    /// All sections, in page order
    pub const ALL: [Section; 5] = [
        Section::Profile,
        Section::Toolbox,
        Section::Certifications,
        Section::Career,
        Section::Education,
    ];

    /// Element id of the section
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Certifications => "certifications",
            Section::Toolbox => "toolbox",
            Section::Career => "career",
            Section::Education => "education",
        }
    }

    /// Heading text of the section
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Certifications => "Certifications",
            Section::Toolbox => "Tech Toolbox",
            Section::Career => "Professional Journey & Career Progression",
            Section::Education => "Education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A content entry with empty required text.
///
/// Warnings are informational; the page still renders the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentWarning {
    pub section: Section,
    /// Position of the entry in its section
    pub index: usize,
    /// Name of the empty field
    pub field: &'static str,
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: empty {}", self.section, self.index, self.field)
    }
}

/// Everything the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub toolbox: Vec<ToolboxEntry>,
    pub certifications: Vec<CertificationEntry>,
    /// Employment history, most recent first
    pub career: Vec<CareerEntry>,
    /// Education history, most recent first
    pub education: Vec<CareerEntry>,
}

impl Portfolio {
    /// Parse portfolio content from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ContentError::Parse)
    }

    /// Read and parse a portfolio content file.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let portfolio = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            toolbox = portfolio.toolbox.len(),
            certifications = portfolio.certifications.len(),
            career = portfolio.career.len(),
            "Loaded portfolio content"
        );
        Ok(portfolio)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ContentError::Serialize)
    }

    /// Number of entries rendered in a section
    pub fn count(&self, section: Section) -> usize {
        match section {
            Section::Profile => 1,
            Section::Toolbox => self.toolbox.len(),
            Section::Certifications => self.certifications.len(),
            Section::Career => self.career.len(),
            Section::Education => self.education.len(),
        }
    }

    /// Report entries whose required text is empty.
    pub fn lint(&self) -> Vec<ContentWarning> {
        let mut warnings = Vec::new();
        let mut check = |section, index, field, value: &str| {
            if value.trim().is_empty() {
                warnings.push(ContentWarning {
                    section,
                    index,
                    field,
                });
            }
        };

        check(Section::Profile, 0, "name", &self.profile.name);
        for (i, entry) in self.toolbox.iter().enumerate() {
            check(Section::Toolbox, i, "label", &entry.label);
            check(Section::Toolbox, i, "value", &entry.value);
        }
        for (i, cert) in self.certifications.iter().enumerate() {
            check(Section::Certifications, i, "alt_text", &cert.alt_text);
            check(Section::Certifications, i, "link", &cert.link);
        }
        for (i, entry) in self.career.iter().enumerate() {
            check(Section::Career, i, "title", &entry.title);
        }
        for (i, entry) in self.education.iter().enumerate() {
            check(Section::Education, i, "title", &entry.title);
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_is_an_empty_portfolio() {
        let portfolio = Portfolio::from_json_str("{}").unwrap();
        assert_eq!(portfolio, Portfolio::default());
        assert_eq!(portfolio.count(Section::Toolbox), 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Portfolio::from_json_str("{\"toolbox\": [").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Portfolio::from_json_path(Path::new("/nonexistent/portfolio.json")).unwrap_err();
        match err {
            ContentError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/portfolio.json"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn lint_flags_empty_fields_by_position() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.name = "Someone".to_string();
        portfolio.toolbox.push(ToolboxEntry::new("x", "Label", "Value", ""));
        portfolio.toolbox.push(ToolboxEntry::new("y", "", "Value", ""));
        portfolio
            .certifications
            .push(CertificationEntry::new("a.png", "Badge", ""));

        let warnings = portfolio.lint();
        assert_eq!(
            warnings,
            vec![
                ContentWarning {
                    section: Section::Toolbox,
                    index: 1,
                    field: "label"
                },
                ContentWarning {
                    section: Section::Certifications,
                    index: 0,
                    field: "link"
                },
            ]
        );
        assert_eq!(warnings[0].to_string(), "toolbox[1]: empty label");
    }

    #[test]
    fn section_anchors_are_unique() {
        let mut anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }
}
