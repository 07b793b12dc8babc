use std::sync::Arc;

use cinematch_api::{
    catalog::CatalogStore,
    config::Config,
    routes::{create_router, AppState},
    services::providers,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Load the catalog before accepting requests so no request pays for the fetch
    let store = CatalogStore::new(providers::from_config(&config));
    let catalog = store.get().await;
    tracing::info!(
        source = catalog.source(),
        movies = catalog.len(),
        "Catalog ready"
    );

    let address = config.bind_address();
    let state = Arc::new(AppState::new(store, config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
