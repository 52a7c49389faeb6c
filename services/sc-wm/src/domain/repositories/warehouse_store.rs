//! 仓库存储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::Warehouse;
use crate::domain::value_objects::{BusinessUnitCode, LocationCode};

/// 仓库存储接口
///
/// 引擎假定存储在单个逻辑操作内提供 read-your-writes 一致性；
/// 基础设施层错误以 AppError::Database 原样上抛。
#[async_trait]
pub trait WarehouseStore: Send + Sync {
    /// 查询所有仓库
    async fn get_all(&self) -> AppResult<Vec<Warehouse>>;

    /// 根据业务单元编码查找仓库
    async fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> AppResult<Option<Warehouse>>;

    /// 查询某位置的活跃仓库（archived_at 为空）
    ///
    /// 端口自身的能力，调用方不需要向具体实现做向下转型
    async fn find_active_by_location(&self, location: &LocationCode)
    -> AppResult<Vec<Warehouse>>;

    /// 插入仓库；存储负责填充 created_at 并保证 archived_at 为空，
    /// 返回已打时间戳的记录
    async fn create(&self, warehouse: &Warehouse) -> AppResult<Warehouse>;

    /// 按业务单元编码覆盖可变字段（location/capacity/stock）；
    /// archived_at 仅在传入值非空时写入，created_at 不变
    async fn update(&self, warehouse: &Warehouse) -> AppResult<()>;

    /// 物理删除；属于存储契约，引擎的操作不会调用
    async fn remove(&self, code: &BusinessUnitCode) -> AppResult<()>;
}
