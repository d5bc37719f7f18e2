mod cli;

use crate::cli::{GeneratorArg, CLI};
use clap::Parser;
use snip_core::Shortener;
use snip_gateway::{App, AppState};
use snip_generator::{RandomHexGenerator, SeqGenerator};
use snip_shortener::{ShortenerService, ShortenerSettings};
use snip_storage::InMemoryStore;
use snip_telemetry::TelemetrySettings;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    let _telemetry = snip_telemetry::init(
        TelemetrySettings::builder()
            .service_name("snip-gateway")
            .format(config.log_format.into())
            .otlp_endpoint(config.otlp_endpoint.clone())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        generator = %config.generator,
        max_attempts = config.max_attempts,
        public_base_url = config.public_base_url.as_deref(),
        "starting gateway server"
    );

    let store = Arc::new(InMemoryStore::new());
    let settings = ShortenerSettings::builder()
        .max_attempts(config.max_attempts)
        .build();

    let shortener: Arc<dyn Shortener> = match config.generator {
        GeneratorArg::Random => Arc::new(
            ShortenerService::new(store, RandomHexGenerator::new()).with_settings(settings),
        ),
        GeneratorArg::Sequential => Arc::new(
            ShortenerService::new(store, SeqGenerator::with_offset(config.seq_offset))
                .with_settings(settings),
        ),
    };

    let state = AppState::new(shortener, config.public_base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
