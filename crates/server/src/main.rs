mod api;
mod cli;
mod router;
mod state;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use symcheck_core::Catalog;

use crate::state::AppState;

fn load_config() -> symcheck_core::Config {
    symcheck_core::config::load_dotenv();
    symcheck_core::Config::from_env()
}

async fn serve(config: &symcheck_core::Config, catalog: Catalog) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(catalog));
    let app = router::build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Symptom checker listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let config = load_config();
    config.log_summary();

    let catalog = Catalog::load(config.catalog.path.as_deref())
        .context("failed to load symptom catalog")?;
    info!(
        "Catalog ready: {} conditions, {} red flags",
        catalog.conditions.len(),
        catalog.red_flags.len()
    );

    let args: Vec<String> = std::env::args().collect();
    if cli::dispatch(&config, &catalog, &args)? {
        return Ok(());
    }

    serve(&config, catalog).await
}
