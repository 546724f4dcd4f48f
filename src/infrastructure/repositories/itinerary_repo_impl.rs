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

use crate::domain::models::itinerary::{Itinerary, ItineraryFields};
use crate::domain::repositories::itinerary_repository::ItineraryRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::itinerary as itinerary_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 行程仓库实现
#[derive(Clone)]
pub struct ItineraryRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ItineraryRepositoryImpl {
    /// 创建新的行程仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItineraryRepository for ItineraryRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Itinerary>, RepositoryError> {
        let models = itinerary_entity::Entity::find()
            .order_by_asc(itinerary_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Itinerary>, RepositoryError> {
        let model = itinerary_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, fields: &ItineraryFields) -> Result<Itinerary, RepositoryError> {
        let now = Utc::now();
        let model = itinerary_entity::ActiveModel {
            departure_city: Set(fields.departure_city.clone()),
            arrival_city: Set(fields.arrival_city.clone()),
            date_departure: Set(fields.date_departure.clone()),
            time_departure: Set(fields.time_departure.clone()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(
        &self,
        id: i32,
        fields: &ItineraryFields,
    ) -> Result<Itinerary, RepositoryError> {
        let mut model: itinerary_entity::ActiveModel = itinerary_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.departure_city = Set(fields.departure_city.clone());
        model.arrival_city = Set(fields.arrival_city.clone());
        model.date_departure = Set(fields.date_departure.clone());
        model.time_departure = Set(fields.time_departure.clone());
        model.updated_at = Set(Utc::now().into());

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // Dependent flights go with it through the foreign key rule
        let result = itinerary_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<itinerary_entity::Model> for Itinerary {
    fn from(model: itinerary_entity::Model) -> Self {
        Self {
            id: model.id,
            departure_city: model.departure_city,
            arrival_city: model.arrival_city,
            date_departure: model.date_departure,
            time_departure: model.time_departure,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
