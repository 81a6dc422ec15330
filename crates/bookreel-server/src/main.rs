mod api;
mod middleware;

use std::sync::Arc;

use bookreel_scraper::{BookExtractor, ExtractionProfile, ListingClient};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = bookreel_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let extractor = match &config.profile_path {
        Some(path) => {
            let patterns = bookreel_core::load_profile_patterns(path)?;
            BookExtractor::new(ExtractionProfile::compile(&patterns)?)
        }
        None => BookExtractor::default(),
    };
    tracing::info!(
        env = %config.env,
        profile = extractor.profile().name(),
        fetch_timeout_secs = config.fetch_timeout_secs,
        "starting bookreel-server"
    );

    let client =
        ListingClient::with_extractor(config.fetch_timeout_secs, &config.user_agent, extractor)?;
    let app = build_app(
        AppState {
            client: Arc::new(client),
        },
        RateLimitState::from_config(&config),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
