//! Static HTML rendering.
//!
//! Renders the same component tree the desktop app mounts into a standalone
//! document with `dioxus-ssr`. The head carries the global stylesheet and the
//! bootstrap's [`HeadStyles`], so the document is self-contained apart from
//! its image assets.

use cloudfolio_core::{HeadStyles, Portfolio};
use dioxus::prelude::*;

use crate::components::HeadStyleNodes;
use crate::page::{PortfolioPage, PortfolioPageProps};
use crate::theme::GLOBAL_STYLES;

/// Element id of the global stylesheet node
pub const GLOBAL_STYLES_ID: &str = "cloudfolio-global-styles";

/// Window and document title for a portfolio
pub fn page_title(portfolio: &Portfolio) -> String {
    if portfolio.profile.name.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} | Portfolio", portfolio.profile.name)
    }
}

#[derive(Clone, PartialEq, Props)]
struct DocumentHeadProps {
    page_title: String,
    styles: HeadStyles,
}

#[component]
fn DocumentHead(props: DocumentHeadProps) -> Element {
    rsx! {
        meta { charset: "utf-8" }
        meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        title { "{props.page_title}" }
        style { id: GLOBAL_STYLES_ID, dangerous_inner_html: GLOBAL_STYLES }
        HeadStyleNodes { styles: props.styles.clone() }
    }
}

/// Render the page body markup.
pub fn render_body(portfolio: &Portfolio, year: Option<i32>) -> String {
    let mut dom = VirtualDom::new_with_props(
        PortfolioPage,
        PortfolioPageProps {
            portfolio: portfolio.clone(),
            year,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_head(portfolio: &Portfolio, styles: &HeadStyles) -> String {
    let mut dom = VirtualDom::new_with_props(
        DocumentHead,
        DocumentHeadProps {
            page_title: page_title(portfolio),
            styles: styles.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a complete HTML document for `portfolio`.
///
/// `styles` is rendered as-is; the caller owns registration.
pub fn render_document(portfolio: &Portfolio, styles: &HeadStyles, year: Option<i32>) -> String {
    let head = render_head(portfolio, styles);
    let body = render_body(portfolio, year);
    tracing::debug!(
        head_bytes = head.len(),
        body_bytes = body.len(),
        head_styles = styles.len(),
        "Rendered portfolio document"
    );

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n{head}\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}
