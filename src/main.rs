// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use swiftly_search::app::{create_router, AppState, VERSION};
use swiftly_search::models::backend::IndexBackend;
use swiftly_search::models::product::Product;
use swiftly_search::services::meili::MeiliIndex;
use swiftly_search::services::memory::MemoryIndex;
use swiftly_search::services::search::SearchService;

#[tokio::main]
async fn main() {
    // Get configuration from environment variables
    let backend = IndexBackend::from_env();

    let search_service = match backend {
        IndexBackend::Meilisearch => connect_meilisearch().await,
        IndexBackend::Memory => Some(build_memory_service()),
    };

    let state = AppState {
        search_service,
        backend,
    };

    let app = create_router(state);

    // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    println!(
        "swiftly-search v{} listening on {} (backend: {})",
        VERSION, addr, backend
    );

    axum::serve(listener, app).await.unwrap();
}

/// Connect to Meilisearch and initialize the products index.
/// On failure the server still starts; search routes answer 503.
async fn connect_meilisearch() -> Option<Arc<SearchService>> {
    let host =
        env::var("MEILISEARCH_HOST").expect("MEILISEARCH_HOST environment variable must be set");
    let index_name = env::var("SEARCH_INDEX_NAME").unwrap_or_else(|_| "products".to_string());

    match MeiliIndex::new(&host, index_name) {
        Ok(index) => {
            if let Err(e) = index.init_index().await {
                eprintln!("Failed to initialize Meilisearch index: {}", e);
            }
            Some(Arc::new(SearchService::new(Arc::new(index))))
        }
        Err(e) => {
            eprintln!("Failed to connect to Meilisearch: {}", e);
            eprintln!("Continuing without search functionality");
            None
        }
    }
}

/// Build the in-memory backend, optionally seeded from a JSON catalog file.
fn build_memory_service() -> Arc<SearchService> {
    let catalog: Vec<Product> = match env::var("CATALOG_PATH") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read catalog file {}: {}", path, e));
            serde_json::from_str(&raw)
                .unwrap_or_else(|e| panic!("Failed to parse catalog file {}: {}", path, e))
        }
        Err(_) => {
            println!("CATALOG_PATH not set, starting with an empty catalog");
            Vec::new()
        }
    };

    println!("Loaded {} products into the memory index", catalog.len());
    Arc::new(SearchService::new(Arc::new(MemoryIndex::new(catalog))))
}
