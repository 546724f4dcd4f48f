// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::passenger::PassengerFields;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PassengerRequestDto {
    #[validate(length(min = 1, max = 191, message = "name must be 1-191 characters"))]
    pub name: String,
    #[serde(rename = "idNumber")]
    #[validate(length(min = 1, max = 191, message = "idNumber must be 1-191 characters"))]
    pub id_number: String,
    #[serde(rename = "phoneNumber")]
    #[validate(length(min = 1, max = 191, message = "phoneNumber must be 1-191 characters"))]
    pub phone_number: String,
    #[validate(range(min = 1, message = "itinerary_id must be a positive integer"))]
    pub itinerary_id: i32,
}

impl From<PassengerRequestDto> for PassengerFields {
    fn from(dto: PassengerRequestDto) -> Self {
        Self {
            name: dto.name,
            id_number: dto.id_number,
            phone_number: dto.phone_number,
            itinerary_id: dto.itinerary_id,
        }
    }
}
