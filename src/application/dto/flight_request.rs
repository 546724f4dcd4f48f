// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::flight::FlightFields;

/// 创建或更新航班的请求体
///
/// `itinerary_id` 是否存在由数据库外键保证，这里只校验取值范围
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct FlightRequestDto {
    #[serde(rename = "departureCity")]
    #[validate(length(min = 1, max = 191, message = "departureCity must be 1-191 characters"))]
    pub departure_city: String,
    #[serde(rename = "arrivalCity")]
    #[validate(length(min = 1, max = 191, message = "arrivalCity must be 1-191 characters"))]
    pub arrival_city: String,
    #[serde(rename = "dateDeparture")]
    #[validate(length(min = 1, max = 191, message = "dateDeparture must be 1-191 characters"))]
    pub date_departure: String,
    #[serde(rename = "dateArrival")]
    #[validate(length(min = 1, max = 191, message = "dateArrival must be 1-191 characters"))]
    pub date_arrival: String,
    #[validate(range(min = 1, message = "itinerary_id must be a positive integer"))]
    pub itinerary_id: i32,
}

impl From<FlightRequestDto> for FlightFields {
    fn from(dto: FlightRequestDto) -> Self {
        Self {
            departure_city: dto.departure_city,
            arrival_city: dto.arrival_city,
            date_departure: dto.date_departure,
            date_arrival: dto.date_arrival,
            itinerary_id: dto.itinerary_id,
        }
    }
}
