use std::sync::Arc;

use anyhow::Context;

use kitchenpos_api::app::{self, services::AppServices};
use kitchenpos_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    kitchenpos_observability::init(config.log_format);

    if !config.seed_demo_data {
        tracing::warn!("KITCHENPOS_SEED_DEMO=false; no menus or tables exist, every order will be rejected");
    }

    let services = Arc::new(AppServices::in_memory(config.seed_demo_data)?);
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
