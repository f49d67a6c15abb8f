//! Visual theme: global stylesheet and palette constants.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
