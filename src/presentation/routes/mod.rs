// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::flight_repo_impl::FlightRepositoryImpl;
use crate::infrastructure::repositories::itinerary_repo_impl::ItineraryRepositoryImpl;
use crate::infrastructure::repositories::passenger_repo_impl::PassengerRepositoryImpl;
use crate::presentation::handlers::{flight_handler, itinerary_handler, passenger_handler};
use axum::{routing::get, Extension, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;


/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，资源路由统一挂在 `/api` 下
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route(
            "/itineraries",
            get(itinerary_handler::index::<ItineraryRepositoryImpl>)
                .post(itinerary_handler::store::<ItineraryRepositoryImpl>),
        )
        .route(
            "/itineraries/{id}",
            get(itinerary_handler::show::<ItineraryRepositoryImpl>)
                .put(itinerary_handler::update::<ItineraryRepositoryImpl>)
                .delete(itinerary_handler::destroy::<ItineraryRepositoryImpl>),
        )
        .route(
            "/itineraries/{id}/flights",
            get(itinerary_handler::flights::<ItineraryRepositoryImpl, FlightRepositoryImpl>),
        )
        .route(
            "/itineraries/{id}/passengers",
            get(itinerary_handler::passengers::<ItineraryRepositoryImpl, PassengerRepositoryImpl>),
        )
        .route(
            "/flights",
            get(flight_handler::index::<FlightRepositoryImpl>)
                .post(flight_handler::store::<FlightRepositoryImpl>),
        )
        .route(
            "/flights/{id}",
            get(flight_handler::show::<FlightRepositoryImpl>)
                .put(flight_handler::update::<FlightRepositoryImpl>)
                .delete(flight_handler::destroy::<FlightRepositoryImpl>),
        )
        .route(
            "/passengers",
            get(passenger_handler::index::<PassengerRepositoryImpl>)
                .post(passenger_handler::store::<PassengerRepositoryImpl>),
        )
        .route(
            "/passengers/{id}",
            get(passenger_handler::show::<PassengerRepositoryImpl>)
                .put(passenger_handler::update::<PassengerRepositoryImpl>)
                .delete(passenger_handler::destroy::<PassengerRepositoryImpl>),
        );

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
}

/// 组装完整应用：路由加上三个仓库扩展
///
/// 仓库共享同一个连接池
pub fn app(db: Arc<DatabaseConnection>) -> Router {
    let itinerary_repo = Arc::new(ItineraryRepositoryImpl::new(db.clone()));
    let flight_repo = Arc::new(FlightRepositoryImpl::new(db.clone()));
    let passenger_repo = Arc::new(PassengerRepositoryImpl::new(db));

    routes()
        .layer(Extension(itinerary_repo))
        .layer(Extension(flight_repo))
        .layer(Extension(passenger_repo))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
