// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 航班实体
///
/// 每个航班隶属于唯一的行程，行程删除时航班随之删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// 航班ID
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
    /// 到达日期
    #[serde(rename = "dateArrival")]
    pub date_arrival: String,
    /// 所属行程ID
    pub itinerary_id: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 航班的可编辑字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightFields {
    pub departure_city: String,
    pub arrival_city: String,
    pub date_departure: String,
    pub date_arrival: String,
    pub itinerary_id: i32,
}
