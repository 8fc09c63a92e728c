use anyhow::Result;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod catalog_view;
mod config;
mod error;
mod input;
mod models;
mod pipeline;
mod pricing;
mod render;
mod session;
mod source;
mod traits;
mod view_state;

use catalog_view::CatalogView;
use config::Config;
use source::HttpProductSource;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("Starting product catalog ({} per page)", config.page_size);

    let source = HttpProductSource::new(config.products_url.clone());

    // Shown until the single fetch completes
    println!("{}", render::render_skeleton(config.page_size));
    let mut view = CatalogView::mount(&source, config.page_size).await;
    if view.catalog().is_empty() {
        warn!("Catalog is empty - every page will show the empty-state message");
    }
    info!("Catalog ready at {}", view.catalog().loaded_at().to_rfc3339());

    println!("{}", view.render());
    println!("{}", render::render_help());

    let stdin = BufReader::new(tokio::io::stdin());
    session::run(&mut view, stdin, &mut std::io::stdout()).await?;

    info!("Exiting product catalog");
    Ok(())
}
