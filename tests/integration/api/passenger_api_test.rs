// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{create, create_test_app, execute_sql, itinerary_body, passenger_body};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_passenger_lifecycle() {
    let app = create_test_app().await;
    let itinerary_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;

    let id = create(&app.server, "/api/passengers", &passenger_body(itinerary_id)).await;

    let body: Value = app.server.get(&format!("/api/passengers/{}", id)).await.json();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["idNumber"], "P1234567");
    assert_eq!(body["phoneNumber"], "+44 20 7946 0000");
    assert_eq!(body["itinerary_id"], itinerary_id);

    let mut update = passenger_body(itinerary_id);
    update["phoneNumber"] = json!("+44 20 7946 0999");
    let response = app
        .server
        .put(&format!("/api/passengers/{}", id))
        .json(&update)
        .await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "message": "Passenger updated successfully" }));

    let body: Value = app.server.get(&format!("/api/passengers/{}", id)).await.json();
    assert_eq!(body["phoneNumber"], "+44 20 7946 0999");
    assert_eq!(body["name"], "Ada Lovelace");

    let response = app.server.delete(&format!("/api/passengers/{}", id)).await;
    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "message": "Passenger deleted successfully" }));

    let response = app.server.get(&format!("/api/passengers/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Passenger not found" }));

    // Itinerary can be deleted once its passengers are gone
    app.server
        .delete(&format!("/api/itineraries/{}", itinerary_id))
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_list_passengers() {
    let app = create_test_app().await;
    let itinerary_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;

    for _ in 0..3 {
        create(&app.server, "/api/passengers", &passenger_body(itinerary_id)).await;
    }

    let list: Vec<Value> = app.server.get("/api/passengers").await.json();
    assert_eq!(list.len(), 3);
    assert!(list.windows(2).all(|w| w[0]["id"].as_i64() < w[1]["id"].as_i64()));
}

#[tokio::test]
async fn test_create_passenger_with_missing_field_is_rejected() {
    let app = create_test_app().await;
    let itinerary_id = create(&app.server, "/api/itineraries", &itinerary_body()).await;

    let response = app
        .server
        .post("/api/passengers")
        .json(&json!({
            "name": "Ada Lovelace",
            "phoneNumber": "+44 20 7946 0000",
            "itinerary_id": itinerary_id
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid passenger data");
}

#[tokio::test]
async fn test_create_passenger_for_unknown_itinerary_fails() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/passengers")
        .json(&passenger_body(12))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error saving passenger");
}

#[tokio::test]
async fn test_delete_missing_passenger_is_404() {
    let app = create_test_app().await;

    let response = app.server.delete("/api/passengers/5").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Passenger not found" }));
}

#[tokio::test]
async fn test_storage_failure_on_show_is_500() {
    let app = create_test_app().await;
    execute_sql(&app.db_pool, "DROP TABLE passengers").await;

    let response = app.server.get("/api/passengers/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Error fetching passenger");
}
