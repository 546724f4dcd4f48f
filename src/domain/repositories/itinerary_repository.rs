// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::itinerary::{Itinerary, ItineraryFields};
use async_trait::async_trait;

/// 行程仓库特质
///
/// 定义行程数据访问接口。删除行程时，其下属航班由数据库的级联规则一并删除。
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// 按插入顺序返回全部行程
    async fn find_all(&self) -> Result<Vec<Itinerary>, RepositoryError>;

    /// 根据ID查找行程
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Itinerary))` - 找到行程
    /// * `Ok(None)` - 行程不存在
    /// * `Err(RepositoryError)` - 查询失败
    async fn find_by_id(&self, id: i32) -> Result<Option<Itinerary>, RepositoryError>;

    /// 创建行程，返回带有生成ID和时间戳的完整记录
    async fn create(&self, fields: &ItineraryFields) -> Result<Itinerary, RepositoryError>;

    /// 覆盖行程的全部可编辑字段
    ///
    /// 行程不存在时返回 `RepositoryError::NotFound`
    async fn update(&self, id: i32, fields: &ItineraryFields)
        -> Result<Itinerary, RepositoryError>;

    /// 删除行程
    ///
    /// 行程不存在时返回 `RepositoryError::NotFound`
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
