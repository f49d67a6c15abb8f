//! Core types for Cloudfolio
//!
//! Every content type is immutable once loaded. Missing string fields
//! deserialize to the empty string so a malformed entry renders empty text
//! instead of failing the whole page.

pub mod career;
pub mod certification;
pub mod portfolio;
pub mod profile;
pub mod toolbox;

pub use career::{CareerEntry, ProjectHighlight};
pub use certification::CertificationEntry;
pub use portfolio::{ContentWarning, Portfolio, Section};
pub use profile::{Profile, SocialKind, SocialLink};
pub use toolbox::ToolboxEntry;
