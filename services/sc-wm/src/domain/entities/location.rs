//! 位置实体

use domain_core::Entity;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LocationCode;

/// 位置
///
/// 由 LocationResolver 的协作方拥有，引擎侧只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// 位置编码
    pub code: LocationCode,
    /// 同时活跃仓库数量上限
    pub max_number_of_warehouses: i32,
    /// 活跃仓库容量总和上限
    pub max_capacity: i32,
}

impl Location {
    pub fn new(code: LocationCode, max_number_of_warehouses: i32, max_capacity: i32) -> Self {
        Self {
            code,
            max_number_of_warehouses,
            max_capacity,
        }
    }
}

impl Entity for Location {
    type Id = LocationCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}
