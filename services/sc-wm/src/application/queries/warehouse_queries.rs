//! Warehouse queries

use crate::domain::value_objects::BusinessUnitCode;

/// 按业务单元编码获取仓库查询
#[derive(Debug, Clone)]
pub struct GetWarehouseQuery {
    pub business_unit_code: BusinessUnitCode,
}

/// 列表仓库查询
#[derive(Debug, Clone, Default)]
pub struct ListWarehousesQuery;
