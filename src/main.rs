use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use website::config::AppConfig;
use website::database::ActivityStore;
use website::logging;
use website::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Config (.env is loaded here)
    let config = AppConfig::from_env()?;

    // 2. Logging
    logging::init();
    info!(build_id = env!("WEBSITE_BUILD_ID"), "starting activity signup service");

    // 3. In-memory directory, seeded once per process
    let store = Arc::new(ActivityStore::seeded());
    let app = web::build_router(store, &config.static_dir);

    // 4. Bind, falling back to the next port once
    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        addr = %bound_addr,
        static_dir = %config.static_dir.display(),
        "server listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
