use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, search::SearchService, types::PkceToken};

pub async fn start_callback_server(state: Arc<Mutex<Option<PkceToken>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    serve(app).await;
}

pub async fn start_search_server(service: Arc<SearchService>) {
    let app = Router::new()
        .route("/", get(api::home))
        .route("/search", get(api::search))
        .route("/health", get(api::health))
        .layer(Extension(service));

    serve(app).await;
}

async fn serve(app: Router) {
    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
