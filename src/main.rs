use clap::Parser; // for cli
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oceangpt_relay::{AppState, build_router, config::Args};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oceangpt_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = Arc::new(AppState::from_args(&args)?);
    let app = build_router(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Relay running on http://{}", addr);
    tracing::info!("Forwarding to {}", args.upstream_url);
    tracing::info!("Upstream timeout: {} seconds", args.upstream_timeout);

    axum::serve(listener, app).await?;
    Ok(())
}
