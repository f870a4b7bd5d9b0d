//! End-to-end exercise of the HTTP surface against an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::ServiceExt;

use meridia_server::core::server::build_app;
use meridia_server::{Config, Directory, ServerState};

async fn test_app() -> Router {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let state = ServerState {
        config: Config::with_overrides("./test-data", 0),
        db,
        directory: Arc::new(Directory::with_seed_data()),
    };

    build_app().with_state(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = test_app().await;
    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn tour_lifecycle_over_http() {
    let app = test_app().await;

    // Create with only the required fields.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/tours",
            json!({"tourName": "Merida PLUS", "month": "June"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let mut tour = body_json(response).await;
    let id = tour["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("tour:"));
    assert_eq!(tour["arrivalDate"], 1);
    assert_eq!(tour["airport"]["transfersIncluded"], "Todos");
    assert_eq!(tour["days"], json!([]));

    // Whole-document replace with an out-of-sequence day list.
    tour["days"] = json!([
        {
            "day": 1,
            "activity": "Chichen Itza",
            "pickup": "Hotel lobby",
            "dropOff": "Hotel lobby",
            "departures": "Daily",
            "totalTime": "12 hrs",
            "cancelationPolicy": "No returnable",
            "pricing": {"adultPriceMXN": 1850.0, "childPriceMXN": 925.0},
            "description": "",
            "pictures": []
        },
        {
            "day": 7,
            "activity": "Uxmal",
            "pickup": "Hotel lobby",
            "dropOff": "Hotel lobby",
            "departures": "Daily",
            "totalTime": "8 hrs",
            "cancelationPolicy": "No returnable",
            "pricing": {"adultPriceMXN": 1500.0, "childPriceMXN": 750.0},
            "description": "",
            "pictures": []
        }
    ]);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/tours/{id}"), tour))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["days"][0]["day"], 1);
    assert_eq!(updated["days"][1]["day"], 2);
    assert_eq!(updated["days"][1]["activity"], "Uxmal");

    // The list reflects the write.
    let response = app.clone().oneshot(get_request("/tours")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Delete, then confirm the 404 error body shape.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/tours/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Tour deleted successfully");

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/tours/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn create_rejects_blank_name_with_error_body() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/tours",
            json!({"tourName": "   ", "month": "June"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("tourName"));
}

#[tokio::test]
async fn directory_endpoints_round_trip() {
    let app = test_app().await;

    // Seeded advisors are listed.
    let response = app.clone().oneshot(get_request("/advisors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let advisors = body_json(response).await;
    let advisor_id = advisors[0]["id"].as_str().unwrap().to_string();

    // Register a client.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/clients",
            json!({
                "name": "Elena Ruiz",
                "email": "elena@example.com",
                "phone": "+52 999 000 1111"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let client = body_json(response).await;

    // Schedule a call, assign it, then complete it.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/videocalls",
            json!({
                "clientId": client["id"],
                "clientName": client["name"],
                "category": "custom_trip",
                "scheduledAt": "2026-09-15T17:00:00Z"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let call = body_json(response).await;
    let call_id = call["id"].as_str().unwrap().to_string();
    assert_eq!(call["status"], "scheduled");
    assert!(call.get("advisorId").is_none());

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/videocalls/{call_id}/assign"),
            json!({"advisorId": advisor_id}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let assigned = body_json(response).await;
    assert_eq!(assigned["advisorName"], advisors[0]["name"]);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/videocalls/{call_id}/status"),
            json!({"status": "completed"}),
        ))
        .await
        .unwrap();
    let completed = body_json(response).await;
    assert_eq!(completed["status"], "completed");

    // Assigning to an unknown advisor is a 404.
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/videocalls/{call_id}/assign"),
            json!({"advisorId": "missing"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quote_status_toggle_over_http() {
    let app = test_app().await;

    let response = app.clone().oneshot(get_request("/quotes")).await.unwrap();
    let quotes = body_json(response).await;
    let quote_id = quotes[0]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/quotes/{quote_id}/status"),
            json!({"status": "done"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "done");
}
