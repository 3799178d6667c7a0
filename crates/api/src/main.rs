use std::sync::Arc;

use ledgerd_api::config::StoreConfig;
use ledgerd_store::RedisKvStore;

#[tokio::main]
async fn main() {
    ledgerd_observability::init();

    let config = StoreConfig::from_env();
    tracing::info!("using redis url {}", config.url());

    let store = RedisKvStore::connect(config.url()).expect("invalid redis url");

    let app = ledgerd_api::app::build_app(Arc::new(store));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
