//! blindboxd — name blind-box gateway daemon.
//!
//! Serves the four workflow endpoints over HTTP, delegating text and image
//! generation to the configured remote model services.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blindbox::server::{router, Config};
use blindbox::{BlindboxService, ChatClient, ImageClient};

/// Blindbox gateway daemon.
#[derive(Parser)]
#[command(name = "blindboxd")]
#[command(version)]
#[command(about = "Name blind-box gateway daemon")]
struct Args {
    /// Address to bind to (overrides BLINDBOX_ADDRESS).
    #[arg(short, long)]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local .env is optional; real deployments set the environment directly.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(address) = args.address {
        config.address = address;
    }

    let service = Arc::new(BlindboxService::new(
        ChatClient::with_endpoint(
            &config.text.api_key,
            &config.text.model,
            &config.text.endpoint,
        ),
        ImageClient::with_endpoint(
            &config.image.api_key,
            &config.image.model,
            &config.image.endpoint,
        ),
    ));

    let listener = tokio::net::TcpListener::bind(&config.address).await?;
    info!(
        address = %config.address,
        text_model = %config.text.model,
        image_model = %config.image.model,
        "blindboxd starting"
    );

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
    }
}
