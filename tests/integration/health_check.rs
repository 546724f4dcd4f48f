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

use super::helpers::create_test_app;
use axum::http::StatusCode;

/// 健康检查测试
///
/// 完整应用（带仓库扩展）下健康检查与版本端点可用
#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;

    response.assert_status(StatusCode::OK);
    response.assert_text("OK");
}

#[tokio::test]
async fn version_reports_crate_version() {
    let app = create_test_app().await;

    let response = app.server.get("/version").await;

    response.assert_status(StatusCode::OK);
    response.assert_text(env!("CARGO_PKG_VERSION"));
}
