// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

/// 仓库接口模块
///
/// 每个实体对应一张表，仓库只执行单条 CRUD 语句。
/// 具体实现由基础设施层提供。
pub mod flight_repository;
pub mod itinerary_repository;
pub mod passenger_repository;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误，包括连接失败与约束冲突
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}
