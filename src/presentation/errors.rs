// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::repositories::RepositoryError;
use crate::presentation::resource::{Operation, ResourceLabels};

/// 接口错误类型
///
/// 序列化为 `{"error": <固定标签>, "message": <详情>}`，404 不带 `message`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl ApiError {
    /// 记录不存在
    pub fn not_found(labels: ResourceLabels) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: labels.not_found(),
            message: None,
        }
    }

    /// 存储层失败
    pub fn storage(
        labels: ResourceLabels,
        operation: Operation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: labels.failure(operation),
            message: Some(message.into()),
        }
    }

    /// 请求体无法解析或未通过校验
    pub fn invalid(labels: ResourceLabels, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: labels.invalid(),
            message: Some(message.into()),
        }
    }

    /// 将仓库错误转换为接口错误
    pub fn from_repository(
        labels: ResourceLabels,
        operation: Operation,
        err: RepositoryError,
    ) -> Self {
        match err {
            RepositoryError::NotFound => {
                debug!("{} lookup missed during {:?}", labels.singular, operation);
                Self::not_found(labels)
            }
            RepositoryError::Database(db_err) => {
                error!("{}: {}", labels.failure(operation), db_err);
                Self::storage(labels, operation, db_err.to_string())
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// 供 `map_err` 使用的转换闭包
pub fn repository_error(
    labels: ResourceLabels,
    operation: Operation,
) -> impl FnOnce(RepositoryError) -> ApiError {
    move |err| ApiError::from_repository(labels, operation, err)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => json!({ "error": self.error, "message": message }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}
