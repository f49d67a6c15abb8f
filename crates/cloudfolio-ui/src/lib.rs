//! Cloudfolio UI Components
//!
//! Dioxus components for the portfolio page, shared by the desktop app and
//! the static HTML export.
//!
//! ## Structure
//!
//! - [`components`]: the page's building blocks (flip card, section
//!   renderers, header, navigation, footer, decoration)
//! - [`page`]: [`PortfolioPage`], the whole body composed from a [`Portfolio`]
//! - [`document`]: server-side rendering of a complete HTML document
//! - [`theme`]: the global stylesheet
//!
//! Data flows one way: the [`Portfolio`] passed to [`PortfolioPage`] is only
//! read. The sole piece of view state is the flip face of each toolbox card.
//!
//! [`Portfolio`]: cloudfolio_core::Portfolio

#![allow(non_snake_case)]

pub mod components;
pub mod document;
pub mod page;
pub mod theme;

pub use components::*;
pub use document::{page_title, render_body, render_document, GLOBAL_STYLES_ID};
pub use page::PortfolioPage;
pub use theme::GLOBAL_STYLES;
