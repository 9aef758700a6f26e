// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use swiftly_search::app::{create_router, AppState, VERSION};
use swiftly_search::models::backend::IndexBackend;
use swiftly_search::models::product::Product;
use swiftly_search::services::memory::MemoryIndex;
use swiftly_search::services::search::SearchService;

fn create_test_app(catalog: Vec<Product>) -> Router {
    let service = SearchService::new(Arc::new(MemoryIndex::new(catalog)));
    let state = AppState {
        search_service: Some(Arc::new(service)),
        backend: IndexBackend::Memory,
    };
    create_router(state)
}

/// Three-product fixture: one matches keyword and brand, one only brand,
/// one neither.
fn fixture_catalog() -> Vec<Product> {
    vec![
        Product {
            sku: 1,
            name: Some("Standing Desk".to_string()),
            brand: Some("Acme".to_string()),
            category: Some("Furniture".to_string()),
            price: Some(549.0),
            rating: Some(4.2),
            ..Product::default()
        },
        Product {
            sku: 2,
            name: Some("Office Chair".to_string()),
            brand: Some("Acme".to_string()),
            category: Some("Furniture".to_string()),
            price: Some(149.0),
            rating: Some(3.4),
            ..Product::default()
        },
        Product {
            sku: 3,
            name: Some("Floor Lamp".to_string()),
            brand: Some("Lux".to_string()),
            category: Some("Lighting".to_string()),
            price: Some(89.0),
            ..Product::default()
        },
    ]
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_version_endpoint_response() {
    let app = create_test_app(vec![]);

    let response = app.oneshot(get("/version")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap();
    assert_eq!(content_type, "application/json");

    let body = body_json(response).await;
    assert_eq!(body["agent"], "swiftly-search");
    assert_eq!(body["version"], VERSION);
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn test_invalid_route_returns_404() {
    let app = create_test_app(vec![]);

    let response = app.oneshot(get("/invalid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_simple_search_returns_matches_without_facets() {
    let app = create_test_app(fixture_catalog());

    let response = app
        .oneshot(get("/api/v1/products/search?keyword=desk"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["products"][0]["sku"], 1);
    assert_eq!(body["facets"]["brand"], json!({}));
    assert_eq!(body["facets"]["price_ranges"]["<200"], 0);
}

#[tokio::test]
async fn test_simple_search_without_keyword_is_bad_request() {
    let app = create_test_app(fixture_catalog());

    let response = app.oneshot(get("/api/v1/products/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_synonym_search_includes_facets() {
    let app = create_test_app(fixture_catalog());

    let response = app
        .oneshot(get("/api/v1/products/synonym-search?keyword=chair"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["facets"]["brand"]["Acme"], 1);
    assert_eq!(body["facets"]["price_ranges"]["<200"], 1);
}

#[tokio::test]
async fn test_faceted_search_keyword_and_brand_round_trip() {
    let app = create_test_app(fixture_catalog());

    let payload = json!({"keyword": "desk", "brands": ["Acme"]});
    let response = app
        .oneshot(post_json("/api/v1/products/faceted-search", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    // Only the document matching both keyword and brand survives
    assert_eq!(body["total"], 1);
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
    assert_eq!(body["products"][0]["sku"], 1);
}

#[tokio::test]
async fn test_faceted_search_all_buckets_present_in_response() {
    let app = create_test_app(fixture_catalog());

    let response = app
        .oneshot(post_json("/api/v1/products/faceted-search", &json!({})))
        .await
        .unwrap();

    let body = body_json(response).await;
    let price_ranges = body["facets"]["price_ranges"].as_object().unwrap();
    let rating_ranges = body["facets"]["rating_ranges"].as_object().unwrap();

    assert_eq!(price_ranges.len(), 5);
    assert_eq!(rating_ranges.len(), 4);
    assert_eq!(price_ranges["<200"], 2);
    assert_eq!(price_ranges["500-999"], 1);
    // Product 3 has no rating and lands in no band
    assert_eq!(rating_ranges["3.1-4.0"], 1);
    assert_eq!(rating_ranges["4.1-5.0"], 1);
}

#[tokio::test]
async fn test_enhanced_search_pagination_and_candidate_facets() {
    let catalog: Vec<Product> = (0..12)
        .map(|i| Product {
            sku: i,
            name: Some(format!("Desk {}", i)),
            price: Some(50.0),
            ..Product::default()
        })
        .collect();
    let app = create_test_app(catalog);

    let payload = json!({"keyword": "desk", "limit": 5, "offset": 0});
    let response = app
        .oneshot(post_json("/api/v1/products/enhanced-search", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["total"], 12);
    assert_eq!(body["products"].as_array().unwrap().len(), 5);
    // Facets cover all 12 candidates, not just the page
    assert_eq!(body["facets"]["price_ranges"]["<200"], 12);
}

#[tokio::test]
async fn test_enhanced_search_negative_limit_is_bad_request() {
    let app = create_test_app(fixture_catalog());

    let payload = json!({"limit": -1});
    let response = app
        .oneshot(post_json("/api/v1/products/enhanced-search", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_enhanced_search_defaults_to_ten_results() {
    let catalog: Vec<Product> = (0..25)
        .map(|i| Product {
            sku: i,
            name: Some("Desk".to_string()),
            ..Product::default()
        })
        .collect();
    let app = create_test_app(catalog);

    let response = app
        .oneshot(post_json(
            "/api/v1/products/enhanced-search",
            &json!({"keyword": "desk"}),
        ))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["total"], 25);
    assert_eq!(body["products"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_search_routes_answer_503_without_backend() {
    let state = AppState {
        search_service: None,
        backend: IndexBackend::Meilisearch,
    };
    let app = create_router(state);

    let response = app
        .oneshot(get("/api/v1/products/search?keyword=desk"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_concurrent_requests_succeed() {
    let app = create_test_app(fixture_catalog());

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let app_clone = app.clone();
            tokio::spawn(async move {
                let response = app_clone
                    .oneshot(get("/api/v1/products/search?keyword=desk"))
                    .await
                    .unwrap();
                response.status()
            })
        })
        .collect();

    for handle in handles {
        let status = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }
}
