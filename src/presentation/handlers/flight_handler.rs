// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::dto::{
        flight_request::FlightRequestDto,
        resource_response::{CreatedResponse, MessageResponse},
    },
    domain::{models::flight::Flight, repositories::flight_repository::FlightRepository},
    presentation::{
        errors::{repository_error, ApiError},
        extractors::validated_json::{ResourceRequest, ValidatedJson},
        resource::{parse_id, Operation, ResourceLabels, FLIGHT},
    },
};

impl ResourceRequest for FlightRequestDto {
    const LABELS: ResourceLabels = FLIGHT;
}

pub async fn index<R>(Extension(repo): Extension<Arc<R>>) -> Result<Json<Vec<Flight>>, ApiError>
where
    R: FlightRepository + 'static,
{
    let flights = repo
        .find_all()
        .await
        .map_err(repository_error(FLIGHT, Operation::List))?;

    Ok(Json(flights))
}

/// 创建航班
///
/// 所属行程不存在时数据库拒绝写入，返回 500
pub async fn store<R>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<FlightRequestDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError>
where
    R: FlightRepository + 'static,
{
    let flight = repo
        .create(&payload.into())
        .await
        .map_err(repository_error(FLIGHT, Operation::Create))?;

    info!("Flight {} created for itinerary {}", flight.id, flight.itinerary_id);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: flight.id })))
}

pub async fn show<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Flight>, ApiError>
where
    R: FlightRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(FLIGHT))?;

    match repo.find_by_id(id).await {
        Ok(Some(flight)) => Ok(Json(flight)),
        Ok(None) => Err(ApiError::not_found(FLIGHT)),
        Err(e) => Err(ApiError::from_repository(FLIGHT, Operation::Show, e)),
    }
}

pub async fn update<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<FlightRequestDto>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: FlightRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(FLIGHT))?;

    repo.update(id, &payload.into())
        .await
        .map_err(repository_error(FLIGHT, Operation::Update))?;

    info!("Flight {} updated", id);
    Ok(Json(MessageResponse {
        message: FLIGHT.updated(),
    }))
}

pub async fn destroy<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: FlightRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(FLIGHT))?;

    repo.delete(id)
        .await
        .map_err(repository_error(FLIGHT, Operation::Destroy))?;

    info!("Flight {} deleted", id);
    Ok(Json(MessageResponse {
        message: FLIGHT.deleted(),
    }))
}
