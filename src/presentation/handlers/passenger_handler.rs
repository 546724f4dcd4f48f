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
        passenger_request::PassengerRequestDto,
        resource_response::{CreatedResponse, MessageResponse},
    },
    domain::{models::passenger::Passenger, repositories::passenger_repository::PassengerRepository},
    presentation::{
        errors::{repository_error, ApiError},
        extractors::validated_json::{ResourceRequest, ValidatedJson},
        resource::{parse_id, Operation, ResourceLabels, PASSENGER},
    },
};

impl ResourceRequest for PassengerRequestDto {
    const LABELS: ResourceLabels = PASSENGER;
}

/// 列出全部乘客
pub async fn index<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Passenger>>, ApiError>
where
    R: PassengerRepository + 'static,
{
    let passengers = repo
        .find_all()
        .await
        .map_err(repository_error(PASSENGER, Operation::List))?;

    Ok(Json(passengers))
}

/// 登记乘客
pub async fn store<R>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<PassengerRequestDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError>
where
    R: PassengerRepository + 'static,
{
    let passenger = repo
        .create(&payload.into())
        .await
        .map_err(repository_error(PASSENGER, Operation::Create))?;

    info!(
        "Passenger {} registered on itinerary {}",
        passenger.id, passenger.itinerary_id
    );
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: passenger.id })))
}

/// 获取乘客详情
pub async fn show<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Passenger>, ApiError>
where
    R: PassengerRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(PASSENGER))?;

    match repo.find_by_id(id).await {
        Ok(Some(passenger)) => Ok(Json(passenger)),
        Ok(None) => Err(ApiError::not_found(PASSENGER)),
        Err(e) => Err(ApiError::from_repository(PASSENGER, Operation::Show, e)),
    }
}

/// 更新乘客信息
pub async fn update<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<PassengerRequestDto>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: PassengerRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(PASSENGER))?;

    repo.update(id, &payload.into())
        .await
        .map_err(repository_error(PASSENGER, Operation::Update))?;

    info!("Passenger {} updated", id);
    Ok(Json(MessageResponse {
        message: PASSENGER.updated(),
    }))
}

/// 删除乘客
pub async fn destroy<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: PassengerRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(PASSENGER))?;

    repo.delete(id)
        .await
        .map_err(repository_error(PASSENGER, Operation::Destroy))?;

    info!("Passenger {} deleted", id);
    Ok(Json(MessageResponse {
        message: PASSENGER.deleted(),
    }))
}
