//! Career Entry - one employment or education period

use serde::{Deserialize, Serialize};

/// A named project worked on during a period, with its own bullet list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectHighlight {
    pub name: String,
    /// Text colour class for the project name
    pub accent_class: String,
    pub bullets: Vec<String>,
}

impl ProjectHighlight {
    pub fn new(name: &str, accent_class: &str, bullets: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            accent_class: accent_class.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// One row of the career or education timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerEntry {
    /// Role or degree
    pub title: String,
    /// Employer or institution, including its location
    pub organization: String,
    /// Free-form period, e.g. "Jul 2021 - Feb 2023"
    pub date_range: String,
    pub description: String,
    /// Ordered achievements
    pub bullets: Vec<String>,
    /// Ordered project highlights, rendered before `bullets`
    pub projects: Vec<ProjectHighlight>,
}

impl CareerEntry {
    pub fn new(title: &str, organization: &str, date_range: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            organization: organization.to_string(),
            date_range: date_range.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    pub fn with_bullets(mut self, bullets: &[&str]) -> Self {
        self.bullets = bullets.iter().map(|b| b.to_string()).collect();
        self
    }

    pub fn with_projects(mut self, projects: Vec<ProjectHighlight>) -> Self {
        self.projects = projects;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_bullet_order() {
        let entry = CareerEntry::new("Trainer", "IIHT", "2020", "Labs")
            .with_bullets(&["first", "second", "third"]);
        assert_eq!(entry.bullets, vec!["first", "second", "third"]);
        assert!(entry.projects.is_empty());
    }

    #[test]
    fn bullets_default_to_empty_list() {
        let entry: CareerEntry = serde_json::from_str(r#"{"title":"Junior Associate"}"#).unwrap();
        assert_eq!(entry.title, "Junior Associate");
        assert!(entry.bullets.is_empty());
        assert!(entry.projects.is_empty());
        assert!(entry.date_range.is_empty());
    }
}
