// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::itinerary::ItineraryFields;

/// 创建或更新行程的请求体
///
/// 所有字段必填，缺失字段在进入存储层之前即被拒绝
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ItineraryRequestDto {
    #[serde(rename = "departureCity")]
    #[validate(length(min = 1, max = 191, message = "departureCity must be 1-191 characters"))]
    pub departure_city: String,
    #[serde(rename = "arrivalCity")]
    #[validate(length(min = 1, max = 191, message = "arrivalCity must be 1-191 characters"))]
    pub arrival_city: String,
    #[serde(rename = "dateDeparture")]
    #[validate(length(min = 1, max = 191, message = "dateDeparture must be 1-191 characters"))]
    pub date_departure: String,
    #[serde(rename = "timeDeparture")]
    #[validate(length(min = 1, max = 191, message = "timeDeparture must be 1-191 characters"))]
    pub time_departure: String,
}

impl From<ItineraryRequestDto> for ItineraryFields {
    fn from(dto: ItineraryRequestDto) -> Self {
        Self {
            departure_city: dto.departure_city,
            arrival_city: dto.arrival_city,
            date_departure: dto.date_departure,
            time_departure: dto.time_departure,
        }
    }
}
