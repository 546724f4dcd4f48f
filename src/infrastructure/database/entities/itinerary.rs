// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 行程数据库实体模型
///
/// 对应数据库中的 itineraries 表
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "itineraries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub departure_city: String,
    pub arrival_city: String,
    pub date_departure: String,
    pub time_departure: String,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flight::Entity")]
    Flights,
    #[sea_orm(has_many = "super::passenger::Entity")]
    Passengers,
}

impl Related<super::flight::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flights.def()
    }
}

impl Related<super::passenger::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passengers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
