// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::passenger::{Passenger, PassengerFields};
use crate::domain::repositories::passenger_repository::PassengerRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::passenger;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 乘客仓库实现
#[derive(Clone)]
pub struct PassengerRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl PassengerRepositoryImpl {
    /// 创建新的乘客仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PassengerRepository for PassengerRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Passenger>, RepositoryError> {
        let models = passenger::Entity::find()
            .order_by_asc(passenger::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_itinerary(
        &self,
        itinerary_id: i32,
    ) -> Result<Vec<Passenger>, RepositoryError> {
        let models = passenger::Entity::find()
            .filter(passenger::Column::ItineraryId.eq(itinerary_id))
            .order_by_asc(passenger::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Passenger>, RepositoryError> {
        let model = passenger::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, fields: &PassengerFields) -> Result<Passenger, RepositoryError> {
        let now = Utc::now();
        let model = passenger::ActiveModel {
            name: Set(fields.name.clone()),
            id_number: Set(fields.id_number.clone()),
            phone_number: Set(fields.phone_number.clone()),
            itinerary_id: Set(fields.itinerary_id),
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
        fields: &PassengerFields,
    ) -> Result<Passenger, RepositoryError> {
        let mut model: passenger::ActiveModel = passenger::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.name = Set(fields.name.clone());
        model.id_number = Set(fields.id_number.clone());
        model.phone_number = Set(fields.phone_number.clone());
        model.itinerary_id = Set(fields.itinerary_id);
        model.updated_at = Set(Utc::now().into());

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = passenger::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<passenger::Model> for Passenger {
    fn from(model: passenger::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            id_number: model.id_number,
            phone_number: model.phone_number,
            itinerary_id: model.itinerary_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
