// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use flightdesk::config::settings::DatabaseSettings;
use flightdesk::infrastructure::database::connection;
use flightdesk::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use serde_json::{json, Value};
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
}

/// 连接一个已完成迁移的内存数据库
///
/// 内存库只存在于单个连接中，因此连接池固定为一个连接
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(10),
        idle_timeout: None,
        sqlx_logging: false,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let server = TestServer::new(routes::app(db_pool.clone())).unwrap();

    TestApp { server, db_pool }
}

#[allow(dead_code)]
pub async fn execute_sql(db: &DatabaseConnection, sql: &str) {
    db.execute(Statement::from_string(DbBackend::Sqlite, sql.to_owned()))
        .await
        .unwrap();
}

pub fn itinerary_body() -> Value {
    json!({
        "departureCity": "New York",
        "arrivalCity": "London",
        "dateDeparture": "2024-11-15",
        "timeDeparture": "08:00:00"
    })
}

pub fn flight_body(itinerary_id: i32) -> Value {
    json!({
        "departureCity": "New York",
        "arrivalCity": "London",
        "dateDeparture": "2024-11-15",
        "dateArrival": "2024-11-16",
        "itinerary_id": itinerary_id
    })
}

pub fn passenger_body(itinerary_id: i32) -> Value {
    json!({
        "name": "Ada Lovelace",
        "idNumber": "P1234567",
        "phoneNumber": "+44 20 7946 0000",
        "itinerary_id": itinerary_id
    })
}

/// 通过 API 创建资源并返回新ID
pub async fn create(server: &TestServer, path: &str, body: &Value) -> i32 {
    let response = server.post(path).json(body).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let created: Value = response.json();
    created["id"].as_i64().unwrap() as i32
}
