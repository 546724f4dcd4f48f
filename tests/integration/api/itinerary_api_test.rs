// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{
    create, create_test_app, execute_sql, flight_body, itinerary_body, passenger_body,
};
use axum::http::StatusCode;
use serde_json::{json, Value};

/// 创建后查询返回完整记录
#[tokio::test]
async fn test_create_and_show_itinerary() {
    let app = create_test_app().await;

    let response = app.server.post("/api/itineraries").json(&itinerary_body()).await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": 1 }));

    let response = app.server.get("/api/itineraries/1").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["departureCity"], "New York");
    assert_eq!(body["arrivalCity"], "London");
    assert_eq!(body["dateDeparture"], "2024-11-15");
    assert_eq!(body["timeDeparture"], "08:00:00");
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn test_list_itineraries_tracks_creates_and_deletes() {
    let app = create_test_app().await;

    let response = app.server.get("/api/itineraries").await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!([]));

    let first = create(&app.server, "/api/itineraries", &itinerary_body()).await;
    let second = create(&app.server, "/api/itineraries", &itinerary_body()).await;
    create(&app.server, "/api/itineraries", &itinerary_body()).await;

    app.server
        .delete(&format!("/api/itineraries/{}", second))
        .await
        .assert_status(StatusCode::OK);

    let body: Vec<Value> = app.server.get("/api/itineraries").await.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["id"], first);
    assert!(body.iter().all(|i| i["id"] != second));
}

#[tokio::test]
async fn test_update_itinerary_overwrites_fields() {
    let app = create_test_app().await;
    let id = create(&app.server, "/api/itineraries", &itinerary_body()).await;

    let response = app
        .server
        .put(&format!("/api/itineraries/{}", id))
        .json(&json!({
            "departureCity": "Paris",
            "arrivalCity": "Tokyo",
            "dateDeparture": "2025-01-02",
            "timeDeparture": "21:30:00"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "message": "Itinerary updated successfully" }));

    let body: Value = app.server.get(&format!("/api/itineraries/{}", id)).await.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["departureCity"], "Paris");
    assert_eq!(body["arrivalCity"], "Tokyo");
    assert_eq!(body["dateDeparture"], "2025-01-02");
    assert_eq!(body["timeDeparture"], "21:30:00");
}

#[tokio::test]
async fn test_missing_itinerary_is_404() {
    let app = create_test_app().await;

    for response in [
        app.server.get("/api/itineraries/42").await,
        app.server
            .put("/api/itineraries/42")
            .json(&itinerary_body())
            .await,
        app.server.delete("/api/itineraries/42").await,
        app.server.get("/api/itineraries/42/flights").await,
        app.server.get("/api/itineraries/abc").await,
    ] {
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Itinerary not found" }));
    }
}

#[tokio::test]
async fn test_create_itinerary_with_missing_field_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/itineraries")
        .json(&json!({
            "departureCity": "New York",
            "arrivalCity": "London",
            "dateDeparture": "2024-11-15"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid itinerary data");
    assert!(body["message"].is_string());

    let list: Vec<Value> = app.server.get("/api/itineraries").await.json();
    assert!(list.is_empty());
}

/// 删除行程时其下全部航班一并删除
#[tokio::test]
async fn test_delete_itinerary_cascades_to_flights() {
    let app = create_test_app().await;
    let itinerary_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;
    let other_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;

    let mut flight_ids = Vec::new();
    for _ in 0..3 {
        flight_ids.push(create(&app.server, "/api/flights", &flight_body(itinerary_id)).await);
    }
    let kept = create(&app.server, "/api/flights", &flight_body(other_id)).await;

    let response = app
        .server
        .delete(&format!("/api/itineraries/{}", itinerary_id))
        .await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "message": "Itinerary deleted successfully" }));

    for id in flight_ids {
        let response = app.server.get(&format!("/api/flights/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Flight not found" }));
    }

    app.server
        .get(&format!("/api/flights/{}", kept))
        .await
        .assert_status(StatusCode::OK);
}

/// 仍有乘客时行程不可删除
#[tokio::test]
async fn test_delete_itinerary_with_passengers_fails() {
    let app = create_test_app().await;
    let itinerary_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;
    create(&app.server, "/api/passengers", &passenger_body(itinerary_id)).await;

    let response = app
        .server
        .delete(&format!("/api/itineraries/{}", itinerary_id))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error deleting itinerary");
    assert!(body["message"].is_string());

    app.server
        .get(&format!("/api/itineraries/{}", itinerary_id))
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_list_flights_and_passengers_of_itinerary() {
    let app = create_test_app().await;
    let itinerary_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;
    let other_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;

    create(&app.server, "/api/flights", &flight_body(itinerary_id)).await;
    create(&app.server, "/api/flights", &flight_body(itinerary_id)).await;
    create(&app.server, "/api/flights", &flight_body(other_id)).await;
    create(&app.server, "/api/passengers", &passenger_body(itinerary_id)).await;

    let flights: Vec<Value> = app
        .server
        .get(&format!("/api/itineraries/{}/flights", itinerary_id))
        .await
        .json();
    assert_eq!(flights.len(), 2);
    assert!(flights.iter().all(|f| f["itinerary_id"] == itinerary_id));

    let passengers: Vec<Value> = app
        .server
        .get(&format!("/api/itineraries/{}/passengers", itinerary_id))
        .await
        .json();
    assert_eq!(passengers.len(), 1);

    let passengers: Vec<Value> = app
        .server
        .get(&format!("/api/itineraries/{}/passengers", other_id))
        .await
        .json();
    assert!(passengers.is_empty());
}

#[tokio::test]
async fn test_storage_failure_on_list_is_500() {
    let app = create_test_app().await;
    execute_sql(&app.db_pool, "DROP TABLE flights").await;
    execute_sql(&app.db_pool, "DROP TABLE passengers").await;
    execute_sql(&app.db_pool, "DROP TABLE itineraries").await;

    let response = app.server.get("/api/itineraries").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error fetching itineraries");
    assert!(body["message"].is_string());
}

/// 端到端示例流程：行程删除后其航班不可再查询
#[tokio::test]
async fn test_example_flow() {
    let app = create_test_app().await;

    let response = app.server.post("/api/itineraries").json(&itinerary_body()).await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": 1 }));

    app.server
        .get("/api/itineraries/1")
        .await
        .assert_status(StatusCode::OK);

    let flight_id = create(&app.server, "/api/flights", &flight_body(1)).await;

    app.server
        .delete("/api/itineraries/1")
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.get(&format!("/api/flights/{}", flight_id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Flight not found" }));
}
