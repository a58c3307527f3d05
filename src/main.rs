use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordwise::ai::OpenAiDefinitionClient;
use wordwise::models::Config;
use wordwise::server::{router, AppState};

#[derive(Debug, Parser)]
#[command(name = "wordwise")]
#[command(about = "AI-backed dictionary lookup web service")]
struct CliArgs {
    /// Address to bind the HTTP server to (host:port).
    #[arg(long, env = "WORDWISE_BIND", default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordwise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let config = Config::from_env()?;

    if config.openai_api_key.is_none() {
        // Serve anyway; every lookup reports a configuration error.
        warn!("OPENAI_API_KEY is not set; lookups will fail until it is configured");
    }
    info!(
        "Using model {} with a {}s request timeout",
        config.model,
        config.timeout.as_secs()
    );

    let definitions = Arc::new(OpenAiDefinitionClient::from_config(&config));
    let app = router(AppState::new(definitions));

    let addr: SocketAddr = args
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", args.bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("wordwise listening on http://{addr}");
    axum::serve(listener, app).await.context("server shutdown")?;
    Ok(())
}
