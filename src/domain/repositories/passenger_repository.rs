// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::passenger::{Passenger, PassengerFields};
use async_trait::async_trait;

/// 乘客仓库特质
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Passenger>, RepositoryError>;
    async fn find_by_itinerary(
        &self,
        itinerary_id: i32,
    ) -> Result<Vec<Passenger>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Passenger>, RepositoryError>;
    async fn create(&self, fields: &PassengerFields) -> Result<Passenger, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        fields: &PassengerFields,
    ) -> Result<Passenger, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
