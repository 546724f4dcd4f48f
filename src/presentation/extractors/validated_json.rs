// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::presentation::errors::ApiError;
use crate::presentation::resource::ResourceLabels;

/// 属于某个资源的请求体
///
/// 校验失败时使用该资源的标签生成错误响应
pub trait ResourceRequest: DeserializeOwned + Validate {
    const LABELS: ResourceLabels;
}

/// 解析并校验 JSON 请求体的提取器
///
/// JSON 语法错误、缺失字段、类型错误和校验失败都返回 422
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: ResourceRequest,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid(T::LABELS, rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::invalid(T::LABELS, errors.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
