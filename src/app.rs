use cloudfolio_core::{HeadStyles, Portfolio};
use cloudfolio_ui::{HeadStyleNodes, PortfolioPage, GLOBAL_STYLES, GLOBAL_STYLES_ID};
use dioxus::prelude::*;

/// State prepared by `main` before launch and handed to [`App`] as root
/// context.
///
/// Both fields are fixed for the lifetime of the window.
#[derive(Clone, Debug)]
pub struct Bootstrap {
    pub portfolio: Portfolio,
    pub styles: HeadStyles,
}

impl Bootstrap {
    /// Bootstrap for `portfolio` with every head style the page needs
    /// already registered.
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            styles: HeadStyles::for_portfolio(),
        }
    }
}

/// Root application component.
///
/// Provides global styles, the registered head styles, and the page.
#[component]
pub fn App() -> Element {
    let bootstrap = use_context::<Bootstrap>();

    rsx! {
        style { id: GLOBAL_STYLES_ID, dangerous_inner_html: GLOBAL_STYLES }
        HeadStyleNodes { styles: bootstrap.styles.clone() }
        PortfolioPage { portfolio: bootstrap.portfolio.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bootstrap: Bootstrap) -> String {
        let mut dom = VirtualDom::new(App).with_root_context(bootstrap);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn seven_cards_share_one_perspective_node() {
        let html = render(Bootstrap::new(Portfolio::canonical()));
        assert_eq!(html.matches(r#"role="button""#).count(), 7);
        assert_eq!(html.matches(r#"id="flip-perspective-style""#).count(), 1);
    }

    #[test]
    fn styles_precede_the_page() {
        let html = render(Bootstrap::new(Portfolio::canonical()));
        let perspective = html.find(r#"id="flip-perspective-style""#).unwrap();
        let first_card = html.find(r#"role="button""#).unwrap();
        assert!(perspective < first_card);
    }
}
