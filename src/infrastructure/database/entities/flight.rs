// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 航班数据库实体模型
///
/// 对应数据库中的 flights 表，`itinerary_id` 级联删除
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub departure_city: String,
    pub arrival_city: String,
    pub date_departure: String,
    pub date_arrival: String,
    pub itinerary_id: i32,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::itinerary::Entity",
        from = "Column::ItineraryId",
        to = "super::itinerary::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Itinerary,
}

impl Related<super::itinerary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Itinerary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
