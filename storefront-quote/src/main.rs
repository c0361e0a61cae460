use anyhow::Context;
use storefront_core::BasketSource;
use storefront_store::ServiceCatalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "storefront_quote=info,storefront_store=info,storefront_services=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: storefront-quote <basket.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read basket {}", path))?;
    let basket = BasketSource::from_json(&raw)?;

    let catalog = ServiceCatalog::load().context("Failed to load service catalog")?;
    tracing::info!("Quoting {} services for {}", catalog.services().len(), path);

    let quotes = catalog.quote_all(&basket);
    let unavailable = quotes.iter().filter(|q| !q.available).count();
    if unavailable > 0 {
        tracing::info!("{} of {} services unavailable", unavailable, quotes.len());
    }

    println!("{}", serde_json::to_string_pretty(&quotes)?);
    Ok(())
}
