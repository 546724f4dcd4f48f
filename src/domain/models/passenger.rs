// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 乘客实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// 乘客ID
    pub id: i32,
    /// 姓名
    pub name: String,
    /// 证件号码
    #[serde(rename = "idNumber")]
    pub id_number: String,
    /// 联系电话
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// 所属行程ID
    pub itinerary_id: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 乘客的可编辑字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerFields {
    pub name: String,
    pub id_number: String,
    pub phone_number: String,
    pub itinerary_id: i32,
}
