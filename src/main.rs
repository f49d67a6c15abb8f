#![allow(non_snake_case)]

mod app;

use clap::Parser;
use cloudfolio_core::Portfolio;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Cloudfolio - Cloud Engineering Portfolio
#[derive(Parser, Debug)]
#[command(name = "cloudfolio-desktop")]
#[command(about = "Cloudfolio - cloud engineering portfolio in a desktop window")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title (default: "<name> | Portfolio")
    #[arg(short, long)]
    title: Option<String>,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    setup_logging();

    let args = Args::parse();

    // Head styles are registered here, before the first widget mounts
    let bootstrap = app::Bootstrap::new(Portfolio::canonical());

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| cloudfolio_ui::page_title(&bootstrap.portfolio));

    tracing::info!(
        %title,
        width = args.width,
        height = args.height,
        head_styles = bootstrap.styles.len(),
        "Starting portfolio window"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(bootstrap)
        .launch(app::App);
}
