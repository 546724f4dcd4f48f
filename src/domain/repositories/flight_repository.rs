// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::flight::{Flight, FlightFields};
use async_trait::async_trait;

/// 航班仓库特质
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// 按插入顺序返回全部航班
    async fn find_all(&self) -> Result<Vec<Flight>, RepositoryError>;
    /// 返回某个行程下的全部航班
    async fn find_by_itinerary(&self, itinerary_id: i32) -> Result<Vec<Flight>, RepositoryError>;
    /// 根据ID查找航班
    async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, RepositoryError>;
    /// 创建航班，所属行程必须存在
    async fn create(&self, fields: &FlightFields) -> Result<Flight, RepositoryError>;
    /// 覆盖航班的全部可编辑字段
    async fn update(&self, id: i32, fields: &FlightFields) -> Result<Flight, RepositoryError>;
    /// 删除航班
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
