//! Warehouse commands
//!
//! 规则校验全部在 handler 内按固定顺序执行（首个失败即中止），
//! 命令本身只是边界层已解析好的输入载体。

use crate::domain::value_objects::{BusinessUnitCode, LocationCode};

/// 创建仓库命令
///
/// created_at/archived_at 不接受输入：前者由存储填充，后者恒为空
#[derive(Debug, Clone)]
pub struct CreateWarehouseCommand {
    pub business_unit_code: BusinessUnitCode,
    pub location: LocationCode,
    pub capacity: i32,
    pub stock: i32,
}

/// 替换仓库命令
///
/// 对既有活跃仓库的可变属性做整体替换；业务单元编码只用于定位目标
#[derive(Debug, Clone)]
pub struct ReplaceWarehouseCommand {
    pub business_unit_code: BusinessUnitCode,
    pub location: LocationCode,
    pub capacity: i32,
    pub stock: i32,
}

/// 归档仓库命令
#[derive(Debug, Clone)]
pub struct ArchiveWarehouseCommand {
    pub business_unit_code: BusinessUnitCode,
}
