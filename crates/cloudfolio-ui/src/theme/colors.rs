//! Color constants for the sky palette.
//!
//! Mirrors the custom properties declared at the top of `GLOBAL_STYLES`, for
//! components that draw inline SVG.

// === SKY (Brand, Links, Icons) ===
pub const SKY_500: &str = "#0ea5e9";
pub const SKY_600: &str = "#0284c7";
pub const SKY_700: &str = "#0369a1";

// === ACCENTS ===
pub const YELLOW_500: &str = "#eab308";

// === NEUTRALS ===
pub const SLATE_200: &str = "#e2e8f0";
pub const CLOUD_WHITE: &str = "#ffffff";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn constants_match_stylesheet() {
        for (property, value) in [
            ("--sky-500", SKY_500),
            ("--sky-600", SKY_600),
            ("--sky-700", SKY_700),
            ("--yellow-500", YELLOW_500),
            ("--slate-200", SLATE_200),
        ] {
            let declaration = format!("{property}: {value};");
            assert!(GLOBAL_STYLES.contains(&declaration), "missing {declaration}");
        }
        assert!(GLOBAL_STYLES.contains(CLOUD_WHITE));
    }
}
