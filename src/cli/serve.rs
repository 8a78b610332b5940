use std::sync::Arc;

use crate::{
    config, error, info,
    management::CatalogManager,
    search::{corpus, Embedder, SearchService},
    server::start_search_server,
    success, warning,
};

/// Builds the search service and serves the recommendation web UI on the
/// configured server address until interrupted.
pub async fn serve() {
    let service = Arc::new(load_service().await);

    success!(
        "Index ready: {} documents over {} catalog rows.",
        service.index_len(),
        service.catalog_len()
    );
    info!(
        "Serving recommendations on http://{}",
        config::server_addr()
    );

    start_search_server(service).await;
}

/// Loads the enriched catalog and the tagged corpus, then embeds the
/// corpus into a fresh search service. Exits with a pointer at the missing
/// pipeline step when a prerequisite file isn't there.
pub(super) async fn load_service() -> SearchService {
    let catalog = match CatalogManager::load_described().await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(
                "Failed to load described catalog. Run vibecli descriptions match first.\n Error: {}",
                e
            );
        }
    };

    let tagged = match CatalogManager::load_tagged().await {
        Ok(tagged) => tagged,
        Err(e) => {
            error!(
                "Failed to load tagged descriptions. Run vibecli descriptions tag first.\n Error: {}",
                e
            );
        }
    };

    let documents = corpus::split_documents(&tagged);
    if documents.is_empty() {
        warning!("Tagged corpus is empty; every search will come back empty.");
    }

    info!("Loading embedding model...");
    let embedder = match Embedder::new() {
        Ok(embedder) => embedder,
        Err(e) => error!("Failed to load embedding model: {}", e),
    };

    info!("Embedding {} documents...", documents.len());
    match SearchService::build(catalog, documents, embedder) {
        Ok(service) => service,
        Err(e) => error!("Failed to build search index: {}", e),
    }
}
