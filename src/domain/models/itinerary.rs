// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 行程实体
///
/// 出发与到达城市、日期、时间均为不透明字符串，不做格式校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    /// 行程ID，由数据库自增生成
    pub id: i32,
    /// 出发城市
    #[serde(rename = "departureCity")]
    pub departure_city: String,
    /// 到达城市
    #[serde(rename = "arrivalCity")]
    pub arrival_city: String,
    /// 出发日期
    #[serde(rename = "dateDeparture")]
    pub date_departure: String,
    /// 出发时间
    #[serde(rename = "timeDeparture")]
    pub time_departure: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 行程的可编辑字段
///
/// 创建与更新共用，更新时全部字段都会被覆盖
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryFields {
    pub departure_city: String,
    pub arrival_city: String,
    pub date_departure: String,
    pub time_departure: String,
}
