// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 资源处理器执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Show,
    Update,
    Destroy,
}

/// 资源在响应中使用的名称
///
/// 每个资源共用同一套 CRUD 响应格式，仅名称不同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLabels {
    /// 单数小写形式，如 `itinerary`
    pub singular: &'static str,
    /// 复数小写形式，如 `itineraries`
    pub plural: &'static str,
    /// 首字母大写形式，如 `Itinerary`
    pub title: &'static str,
}

pub const ITINERARY: ResourceLabels = ResourceLabels {
    singular: "itinerary",
    plural: "itineraries",
    title: "Itinerary",
};

pub const FLIGHT: ResourceLabels = ResourceLabels {
    singular: "flight",
    plural: "flights",
    title: "Flight",
};

pub const PASSENGER: ResourceLabels = ResourceLabels {
    singular: "passenger",
    plural: "passengers",
    title: "Passenger",
};

impl ResourceLabels {
    /// 404 响应的固定标签
    pub fn not_found(&self) -> String {
        format!("{} not found", self.title)
    }

    /// 500 响应的固定标签
    pub fn failure(&self, operation: Operation) -> String {
        match operation {
            Operation::List => format!("Error fetching {}", self.plural),
            Operation::Create => format!("Error saving {}", self.singular),
            Operation::Show => format!("Error fetching {}", self.singular),
            Operation::Update => format!("Error updating {}", self.singular),
            Operation::Destroy => format!("Error deleting {}", self.singular),
        }
    }

    /// 请求体校验失败时的固定标签
    pub fn invalid(&self) -> String {
        format!("Invalid {} data", self.singular)
    }

    pub fn updated(&self) -> String {
        format!("{} updated successfully", self.title)
    }

    pub fn deleted(&self) -> String {
        format!("{} deleted successfully", self.title)
    }
}

/// 解析路径中的主键
///
/// 无法解析或非正数的ID视为记录不存在，返回 `None`
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
