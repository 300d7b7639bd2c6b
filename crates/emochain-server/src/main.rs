mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};

use emochain_detector::ModelLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emochain=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("EMOCHAIN_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("EMOCHAIN_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Prefetch model weights in the background when a cache dir is
    // configured; scoring works either way since inference runs client-side.
    if let Ok(models_dir) = std::env::var("EMOCHAIN_MODELS_DIR") {
        tokio::spawn(async move {
            let mut loader = ModelLoader::new(PathBuf::from(models_dir));
            if let Err(err) = loader.load().await {
                warn!("model prefetch failed: {}", err);
            }
        });
    }

    let app = routes::router();

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!(
        "EmoChain claim service listening on {} (network: {})",
        addr,
        emochain_contract::NETWORK
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
