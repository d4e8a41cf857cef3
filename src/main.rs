use anyhow::Result;
use clap::Parser;
use tracing::info;

mod api;
mod config;
mod error;
mod model;
mod reference;

use api::AppState;
use config::Config;
use reference::ReferenceData;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let tables = ReferenceData::load(config.venues_file.as_deref())?;

    let app = api::router(AppState { tables });
    let addr = config.listen_addr()?;
    info!("Prediction API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
