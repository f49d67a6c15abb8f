//! Inline SVG icons
//!
//! Small stroked line icons on a 24x24 grid. All are decorative
//! (`aria-hidden`); the surrounding element carries the accessible name.

use dioxus::prelude::*;

use crate::theme::colors;

/// Available icon glyphs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Cloud,
    Wrench,
    Award,
    Briefcase,
    GraduationCap,
    LinkedIn,
    GitHub,
}

impl IconKind {
    /// Default stroke color for this glyph
    pub fn default_color(&self) -> &'static str {
        match self {
            IconKind::Cloud => colors::SKY_500,
            IconKind::Wrench => colors::SKY_600,
            IconKind::Award => colors::YELLOW_500,
            IconKind::Briefcase | IconKind::GraduationCap => colors::SKY_700,
            IconKind::LinkedIn | IconKind::GitHub => "currentColor",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub kind: IconKind,
    /// Edge length in pixels (default: 24)
    #[props(default = 24)]
    pub size: u32,
    /// Stroke color; falls back to the glyph's default
    #[props(default)]
    pub color: Option<String>,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let stroke = props
        .color
        .clone()
        .unwrap_or_else(|| props.kind.default_color().to_string());

    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {match props.kind {
                IconKind::Cloud => rsx! {
                    path { d: "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" }
                },
                IconKind::Wrench => rsx! {
                    path { d: "M14.7 6.3a4 4 0 0 0 5 5L21 13l-8 8-3-3 8-8" }
                    path { d: "M14.7 6.3 11 3 3 11l3 3 4-4" }
                },
                IconKind::Award => rsx! {
                    circle { cx: "12", cy: "8", r: "6" }
                    path { d: "M8.2 13.2 7 22l5-3 5 3-1.2-8.8" }
                },
                IconKind::Briefcase => rsx! {
                    rect { x: "2", y: "7", width: "20", height: "14", rx: "2" }
                    path { d: "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
                },
                IconKind::GraduationCap => rsx! {
                    path { d: "M22 10 12 5 2 10l10 5 10-5Z" }
                    path { d: "M6 12v5c0 1.7 2.7 3 6 3s6-1.3 6-3v-5" }
                },
                IconKind::LinkedIn => rsx! {
                    rect { x: "2", y: "2", width: "20", height: "20", rx: "3" }
                    path { d: "M7 10v7" }
                    path { d: "M7 7v.01" }
                    path { d: "M11 17v-4a2 2 0 0 1 4 0v4" }
                    path { d: "M11 10v7" }
                },
                IconKind::GitHub => rsx! {
                    path { d: "M9 19c-4.3 1.4-4.3-2.5-6-3m12 5v-3.5c0-1 .1-1.4-.5-2 2.8-.3 5.5-1.4 5.5-6a4.6 4.6 0 0 0-1.3-3.2 4.2 4.2 0 0 0-.1-3.2s-1.1-.3-3.5 1.3a12.3 12.3 0 0 0-6.2 0C6.5 2.8 5.4 3.1 5.4 3.1a4.2 4.2 0 0 0-.1 3.2A4.6 4.6 0 0 0 4 9.5c0 4.6 2.7 5.7 5.5 6-.6.6-.6 1.2-.5 2V21" }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_icons_inherit_text_color() {
        assert_eq!(IconKind::LinkedIn.default_color(), "currentColor");
        assert_eq!(IconKind::GitHub.default_color(), "currentColor");
        assert_eq!(IconKind::Award.default_color(), colors::YELLOW_500);
    }
}
