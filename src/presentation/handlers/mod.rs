// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每个资源一个处理器模块，提供 index/store/show/update/destroy 五个操作，
/// 处理器对仓库类型泛型化，由路由指定具体实现
pub mod flight_handler;
pub mod itinerary_handler;
pub mod passenger_handler;
