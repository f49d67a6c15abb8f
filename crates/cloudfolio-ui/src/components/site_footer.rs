//! Site footer with the copyright line

use chrono::Datelike;
use dioxus::prelude::*;

/// Current year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn SiteFooter(name: String, year: i32) -> Element {
    rsx! {
        footer { class: "site-footer",
            "\u{00a9} {year} {name} \u{2014} engineered with Rust, Dioxus & a tailwind of joy."
        }
    }
}
