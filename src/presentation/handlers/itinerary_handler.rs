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
        itinerary_request::ItineraryRequestDto,
        resource_response::{CreatedResponse, MessageResponse},
    },
    domain::{
        models::{flight::Flight, itinerary::Itinerary, passenger::Passenger},
        repositories::{
            flight_repository::FlightRepository, itinerary_repository::ItineraryRepository,
            passenger_repository::PassengerRepository,
        },
    },
    presentation::{
        errors::{repository_error, ApiError},
        extractors::validated_json::{ResourceRequest, ValidatedJson},
        resource::{parse_id, Operation, ResourceLabels, FLIGHT, ITINERARY, PASSENGER},
    },
};

impl ResourceRequest for ItineraryRequestDto {
    const LABELS: ResourceLabels = ITINERARY;
}

/// 列出全部行程
pub async fn index<R>(Extension(repo): Extension<Arc<R>>) -> Result<Json<Vec<Itinerary>>, ApiError>
where
    R: ItineraryRepository + 'static,
{
    let itineraries = repo
        .find_all()
        .await
        .map_err(repository_error(ITINERARY, Operation::List))?;

    Ok(Json(itineraries))
}

/// 创建行程
pub async fn store<R>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<ItineraryRequestDto>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError>
where
    R: ItineraryRepository + 'static,
{
    let itinerary = repo
        .create(&payload.into())
        .await
        .map_err(repository_error(ITINERARY, Operation::Create))?;

    info!("Itinerary {} created", itinerary.id);
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: itinerary.id })))
}

/// 获取行程详情
pub async fn show<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Itinerary>, ApiError>
where
    R: ItineraryRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(ITINERARY))?;

    match repo.find_by_id(id).await {
        Ok(Some(itinerary)) => Ok(Json(itinerary)),
        Ok(None) => Err(ApiError::not_found(ITINERARY)),
        Err(e) => Err(ApiError::from_repository(ITINERARY, Operation::Show, e)),
    }
}

/// 更新行程的全部可编辑字段
pub async fn update<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ItineraryRequestDto>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: ItineraryRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(ITINERARY))?;

    repo.update(id, &payload.into())
        .await
        .map_err(repository_error(ITINERARY, Operation::Update))?;

    info!("Itinerary {} updated", id);
    Ok(Json(MessageResponse {
        message: ITINERARY.updated(),
    }))
}

/// 删除行程，其下属航班由数据库级联删除
pub async fn destroy<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: ItineraryRepository + 'static,
{
    let id = parse_id(&id).ok_or_else(|| ApiError::not_found(ITINERARY))?;

    repo.delete(id)
        .await
        .map_err(repository_error(ITINERARY, Operation::Destroy))?;

    info!("Itinerary {} deleted", id);
    Ok(Json(MessageResponse {
        message: ITINERARY.deleted(),
    }))
}

/// 列出某个行程下的全部航班
pub async fn flights<IR, FR>(
    Extension(itinerary_repo): Extension<Arc<IR>>,
    Extension(flight_repo): Extension<Arc<FR>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Flight>>, ApiError>
where
    IR: ItineraryRepository + 'static,
    FR: FlightRepository + 'static,
{
    let id = ensure_exists(itinerary_repo.as_ref(), &id).await?;

    let flights = flight_repo
        .find_by_itinerary(id)
        .await
        .map_err(repository_error(FLIGHT, Operation::List))?;

    Ok(Json(flights))
}

/// 列出某个行程下的全部乘客
pub async fn passengers<IR, PR>(
    Extension(itinerary_repo): Extension<Arc<IR>>,
    Extension(passenger_repo): Extension<Arc<PR>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Passenger>>, ApiError>
where
    IR: ItineraryRepository + 'static,
    PR: PassengerRepository + 'static,
{
    let id = ensure_exists(itinerary_repo.as_ref(), &id).await?;

    let passengers = passenger_repo
        .find_by_itinerary(id)
        .await
        .map_err(repository_error(PASSENGER, Operation::List))?;

    Ok(Json(passengers))
}

async fn ensure_exists<R>(repo: &R, raw_id: &str) -> Result<i32, ApiError>
where
    R: ItineraryRepository,
{
    let id = parse_id(raw_id).ok_or_else(|| ApiError::not_found(ITINERARY))?;

    match repo.find_by_id(id).await {
        Ok(Some(_)) => Ok(id),
        Ok(None) => Err(ApiError::not_found(ITINERARY)),
        Err(e) => Err(ApiError::from_repository(ITINERARY, Operation::Show, e)),
    }
}
