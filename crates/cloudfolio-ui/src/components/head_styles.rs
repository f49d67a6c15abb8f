//! Head style nodes
//!
//! Renders the bootstrap's [`HeadStyles`] registry, one `<style>` element per
//! registered rule, each with its reserved id.

use cloudfolio_core::HeadStyles;
use dioxus::prelude::*;

#[component]
pub fn HeadStyleNodes(styles: HeadStyles) -> Element {
    rsx! {
        for rule in styles.rules().iter() {
            style {
                key: "{rule.id}",
                id: rule.id,
                dangerous_inner_html: rule.css,
            }
        }
    }
}
