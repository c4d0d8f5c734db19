use std::env;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cardioguard_model::logistic::LogisticClassifier;
use cardioguard_server::app;
use cardioguard_server::state::AppState;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let model_path = env::var("CARDIOGUARD_MODEL_PATH")
        .map_err(|_| eyre::eyre!("CARDIOGUARD_MODEL_PATH must point at a model artifact"))?;
    let addr = env::var("CARDIOGUARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let classifier = LogisticClassifier::load(Path::new(&model_path))?;
    let state = AppState::new(Arc::new(classifier));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
