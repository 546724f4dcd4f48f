// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::flight::{Flight, FlightFields};
use crate::domain::repositories::flight_repository::FlightRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::flight as flight_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 航班仓库实现
#[derive(Clone)]
pub struct FlightRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl FlightRepositoryImpl {
    /// 创建新的航班仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FlightRepository for FlightRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Flight>, RepositoryError> {
        let models = flight_entity::Entity::find()
            .order_by_asc(flight_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_itinerary(&self, itinerary_id: i32) -> Result<Vec<Flight>, RepositoryError> {
        let models = flight_entity::Entity::find()
            .filter(flight_entity::Column::ItineraryId.eq(itinerary_id))
            .order_by_asc(flight_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, RepositoryError> {
        let model = flight_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, fields: &FlightFields) -> Result<Flight, RepositoryError> {
        let now = Utc::now();
        let model = flight_entity::ActiveModel {
            departure_city: Set(fields.departure_city.clone()),
            arrival_city: Set(fields.arrival_city.clone()),
            date_departure: Set(fields.date_departure.clone()),
            date_arrival: Set(fields.date_arrival.clone()),
            itinerary_id: Set(fields.itinerary_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(&self, id: i32, fields: &FlightFields) -> Result<Flight, RepositoryError> {
        let mut model: flight_entity::ActiveModel = flight_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.departure_city = Set(fields.departure_city.clone());
        model.arrival_city = Set(fields.arrival_city.clone());
        model.date_departure = Set(fields.date_departure.clone());
        model.date_arrival = Set(fields.date_arrival.clone());
        model.itinerary_id = Set(fields.itinerary_id);
        model.updated_at = Set(Utc::now().into());

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = flight_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<flight_entity::Model> for Flight {
    fn from(model: flight_entity::Model) -> Self {
        Self {
            id: model.id,
            departure_city: model.departure_city,
            arrival_city: model.arrival_city,
            date_departure: model.date_departure,
            date_arrival: model.date_arrival,
            itinerary_id: model.itinerary_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
