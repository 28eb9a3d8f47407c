//! Handler tests for the items domain
//!
//! These tests drive the domain router directly over the in-memory store:
//! - request deserialization (JSON → Rust structs)
//! - response shaping (ids, messages, echoed query parameters)
//! - HTTP status codes, including the fixed 404 body for missing ids

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_items::{InMemoryItemRepository, ItemService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn seeded_app() -> Router {
    let repository = InMemoryItemRepository::seeded();
    let service = ItemService::new(repository);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn list_returns_the_seed_records_keyed_by_id() {
    let app = seeded_app();

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "1": {"name": "Maçã", "price": 1.0, "is_offer": true},
            "2": {"name": "Banana", "price": 0.5, "is_offer": false},
        })
    );
}

#[tokio::test]
async fn create_assigns_id_three_and_defaults_is_offer_to_null() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            &json!({"name": "Pear", "price": 2.5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "id": 3,
            "data": {"name": "Pear", "price": 2.5, "is_offer": null},
        })
    );
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            &json!({"name": "Pear", "price": 2.5}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "item_id": 3,
            "q": null,
            "data": {"name": "Pear", "price": 2.5, "is_offer": null},
        })
    );
}

#[tokio::test]
async fn get_echoes_the_q_parameter() {
    let app = seeded_app();

    let response = app.oneshot(get_request("/1?q=fresh")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["q"], "fresh");
    assert_eq!(body["item_id"], 1);
    assert_eq!(body["data"]["name"], "Maçã");
}

#[tokio::test]
async fn get_missing_id_returns_the_fixed_404_body() {
    let app = seeded_app();

    let response = app.oneshot(get_request("/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn update_replaces_the_item_and_reports_success() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/1",
            &json!({"name": "Apple", "price": 1.2, "is_offer": false}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({
            "message": "Item updated successfully",
            "id": 1,
            "data": {"name": "Apple", "price": 1.2, "is_offer": false},
        })
    );

    // The replacement is visible on a subsequent read
    let response = app.oneshot(get_request("/1")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["data"],
        json!({"name": "Apple", "price": 1.2, "is_offer": false})
    );
}

#[tokio::test]
async fn update_missing_id_returns_404() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/99",
            &json!({"name": "Apple", "price": 1.2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({"detail": "Item not found"}));
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body,
        json!({"message": "Item deleted successfully", "id": 2})
    );

    let response = app
        .clone()
        .oneshot(get_request("/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second delete of the same id also misses
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_ids_are_not_reassigned() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            &json!({"name": "Pear", "price": 2.5}),
        ))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 3);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            &json!({"name": "Fig", "price": 4.0}),
        ))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 4);
}

#[tokio::test]
async fn mistyped_body_is_rejected_with_422_before_the_store() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            &json!({"name": "Pear", "price": "abc"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Missing required field is also a type failure
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/1", &json!({"price": 1.2})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The store was never touched: still exactly the two seed records
    let response = app.oneshot(get_request("/")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_object().unwrap().len(), 2);
    assert_eq!(body["1"]["name"], "Maçã");
}

#[tokio::test]
async fn extra_fields_are_ignored_on_input() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            &json!({"name": "Pear", "price": 2.5, "stock": 12}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["data"],
        json!({"name": "Pear", "price": 2.5, "is_offer": null})
    );
}

#[tokio::test]
async fn non_integer_id_is_rejected_with_400() {
    let app = seeded_app();

    let response = app.oneshot(get_request("/banana")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}
