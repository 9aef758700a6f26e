// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router
//! directly without starting the full binary. Handlers only translate
//! between HTTP and the search service; no search logic lives here.

use crate::error::SearchError;
use crate::models::backend::IndexBackend;
use crate::models::product::Product;
use crate::models::search::{
    EnhancedSearchRequest, Facets, KeywordQuery, PageSpec, PriceRanges, RatingRanges,
    SearchParams, SearchResponse,
};
use crate::models::version::VersionResponse;
use crate::services::search::{SearchService, ENHANCED_DEFAULT_LIMIT};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SWIFTLY_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SWIFTLY_VERSION");

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Absent when the configured index backend could not be reached at
    /// startup; search routes answer 503 until it comes back.
    pub search_service: Option<Arc<SearchService>>,
    pub backend: IndexBackend,
}

// ---------------------------------------------------------------------------
// OpenAPI documentation
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(
        simple_search_handler,
        synonym_search_handler,
        faceted_search_handler,
        enhanced_search_handler
    ),
    components(schemas(
        SearchParams,
        EnhancedSearchRequest,
        SearchResponse,
        Product,
        Facets,
        PriceRanges,
        RatingRanges,
        PageSpec
    ))
)]
pub struct SearchApiDoc;

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// Map a search failure onto its HTTP status.
///
/// Invalid caller input is 400; an unreachable index is 503 and retryable;
/// a rejected query means the builder produced a filter the adapter cannot
/// express, which is our bug, so 500.
fn error_response(error: SearchError) -> (StatusCode, String) {
    let status = match &error {
        SearchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        SearchError::IndexUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        SearchError::QueryRejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, error.to_string())
}

fn require_service(state: &AppState) -> Result<Arc<SearchService>, (StatusCode, String)> {
    state.search_service.clone().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        "Search service is not available".to_string(),
    ))
}

pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "swiftly-search".to_string(),
        version: VERSION.to_string(),
        backend: state.backend.to_string(),
    })
}

/// GET /api/v1/products/search - keyword search over name and synonyms.
#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    params(("keyword" = String, Query, description = "Search keyword")),
    responses(
        (status = 200, description = "First 50 matches, no facets", body = SearchResponse),
        (status = 503, description = "Search index unavailable")
    )
)]
pub async fn simple_search_handler(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let service = require_service(&state)?;
    service
        .simple_search(&query.keyword)
        .await
        .map(Json)
        .map_err(error_response)
}

/// GET /api/v1/products/synonym-search - keyword search with facets.
#[utoipa::path(
    get,
    path = "/api/v1/products/synonym-search",
    params(("keyword" = String, Query, description = "Search keyword")),
    responses(
        (status = 200, description = "First 50 matches plus facets", body = SearchResponse),
        (status = 503, description = "Search index unavailable")
    )
)]
pub async fn synonym_search_handler(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let service = require_service(&state)?;
    service
        .synonym_search(&query.keyword)
        .await
        .map(Json)
        .map_err(error_response)
}

/// POST /api/v1/products/faceted-search - structured search with facets.
#[utoipa::path(
    post,
    path = "/api/v1/products/faceted-search",
    request_body = SearchParams,
    responses(
        (status = 200, description = "First 50 matches plus facets", body = SearchResponse),
        (status = 503, description = "Search index unavailable")
    )
)]
pub async fn faceted_search_handler(
    State(state): State<AppState>,
    Json(params): Json<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let service = require_service(&state)?;
    service
        .faceted_search(&params)
        .await
        .map(Json)
        .map_err(error_response)
}

/// POST /api/v1/products/enhanced-search - structured search with
/// caller-controlled pagination.
#[utoipa::path(
    post,
    path = "/api/v1/products/enhanced-search",
    request_body = EnhancedSearchRequest,
    responses(
        (status = 200, description = "Requested page plus facets", body = SearchResponse),
        (status = 400, description = "Negative limit or offset"),
        (status = 503, description = "Search index unavailable")
    )
)]
pub async fn enhanced_search_handler(
    State(state): State<AppState>,
    Json(request): Json<EnhancedSearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let service = require_service(&state)?;

    // Validated before any index query is issued
    let page = PageSpec::new(
        request.limit.unwrap_or(ENHANCED_DEFAULT_LIMIT as i64),
        request.offset.unwrap_or(0),
    )
    .map_err(error_response)?;

    service
        .enhanced_search(&request.params, page)
        .await
        .map(Json)
        .map_err(error_response)
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version_handler))
        .route("/api/v1/products/search", get(simple_search_handler))
        .route(
            "/api/v1/products/synonym-search",
            get(synonym_search_handler),
        )
        .route(
            "/api/v1/products/faceted-search",
            post(faceted_search_handler),
        )
        .route(
            "/api/v1/products/enhanced-search",
            post(enhanced_search_handler),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", SearchApiDoc::openapi()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_maps_taxonomy_to_status() {
        let (status, _) = error_response(SearchError::InvalidRequest("limit".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(SearchError::IndexUnavailable("down".to_string()));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, _) = error_response(SearchError::QueryRejected("bad field".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_router_creation_without_service() {
        let state = AppState {
            search_service: None,
            backend: IndexBackend::Memory,
        };
        let _router = create_router(state);
    }
}
