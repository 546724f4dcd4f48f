// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据
pub mod flight_request;
pub mod itinerary_request;
pub mod passenger_request;
pub mod resource_response;


/// 字符串列的最大长度
pub const MAX_STRING_LENGTH: u64 = 191;
