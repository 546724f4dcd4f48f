// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 行程（itinerary）：一次出行计划，拥有多个航班与乘客
/// - 航班（flight）：隶属于某个行程的单段飞行
/// - 乘客（passenger）：登记在某个行程下的旅客
pub mod flight;
pub mod itinerary;
pub mod passenger;
