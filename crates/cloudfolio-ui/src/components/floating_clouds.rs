//! Floating Clouds Background
//!
//! Decorative SVG clouds drifting across the page behind all content.
//! Hidden from assistive technology and transparent to pointer input.

use dioxus::prelude::*;

use crate::theme::colors;

/// (top %, width px, drift seconds, start delay seconds)
const CLOUDS: [(u32, u32, u32, i32); 5] = [
    (6, 180, 90, 0),
    (18, 120, 70, -25),
    (34, 220, 120, -60),
    (55, 140, 85, -10),
    (72, 200, 110, -80),
];

#[component]
pub fn FloatingClouds() -> Element {
    rsx! {
        div { class: "floating-clouds", "aria-hidden": "true",
            for (index, (top, width, duration, delay)) in CLOUDS.iter().enumerate() {
                svg {
                    key: "{index}",
                    class: "floating-cloud",
                    style: "top: {top}%; width: {width}px; animation-duration: {duration}s; animation-delay: {delay}s;",
                    view_box: "0 0 64 32",
                    g {
                        fill: colors::CLOUD_WHITE,
                        stroke: colors::SLATE_200,
                        stroke_width: "0.5",
                        circle { cx: "20", cy: "20", r: "10" }
                        circle { cx: "34", cy: "14", r: "13" }
                        circle { cx: "48", cy: "20", r: "9" }
                        rect { x: "12", y: "20", width: "42", height: "10", rx: "5" }
                    }
                }
            }
        }
    }
}
