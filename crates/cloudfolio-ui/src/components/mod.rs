//! Reusable portfolio components.

mod career_timeline;
mod certification_gallery;
mod flip_card;
mod floating_clouds;
mod head_styles;
mod icons;
mod nav_bar;
mod profile_header;
mod section_heading;
mod site_footer;
mod toolbox_grid;

pub use career_timeline::{CareerItem, CareerItemProps, CareerTimeline, CareerTimelineProps};
pub use certification_gallery::{CertificationGallery, CertificationGalleryProps};
pub use flip_card::{FlipCard, FlipCardProps};
pub use floating_clouds::FloatingClouds;
pub use head_styles::HeadStyleNodes;
pub use icons::{Icon, IconKind};
pub use nav_bar::{NavBar, NAV_SECTIONS};
pub use profile_header::ProfileHeader;
pub use section_heading::SectionHeading;
pub use site_footer::{current_year, SiteFooter};
pub use toolbox_grid::{ToolboxGrid, ToolboxGridProps};
