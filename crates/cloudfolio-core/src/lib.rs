//! Cloudfolio Core Library
//!
//! Content model and view state for a single-page cloud engineering portfolio.
//!
//! ## Overview
//!
//! The page is pure declarative composition over fixed, hand-authored data.
//! This crate holds everything that is not markup:
//!
//! - **Content**: the [`Portfolio`] data model and its canonical instance
//! - **Flip cards**: the [`FlipFace`] state machine and the [`FlipDeck`] arena
//!   that gives every toolbox card its own independent state
//! - **Head styles**: the [`HeadStyles`] registry, populated once by the
//!   application bootstrap before any widget mounts
//!
//! ## Quick Start
//!
//! ```
//! use cloudfolio_core::{FlipDeck, FlipTrigger, HeadStyles, Portfolio, FLIP_PERSPECTIVE};
//!
//! let portfolio = Portfolio::canonical();
//!
//! let mut styles = HeadStyles::new();
//! styles.register(FLIP_PERSPECTIVE);
//!
//! let mut deck = FlipDeck::new(portfolio.toolbox.len());
//! deck.apply(0, FlipTrigger::Click);
//! assert!(deck.face(0).unwrap().is_flipped());
//! ```

pub mod content;
pub mod error;
pub mod flip;
pub mod styles;
pub mod types;

pub use error::ContentError;
pub use flip::{FlipDeck, FlipFace, FlipTrigger};
pub use styles::{HeadStyles, StyleRule, FLIP_PERSPECTIVE};
pub use types::*;
