//! Business logic handler

use std::sync::Arc;

use chrono::Utc;
use errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::domain::entities::{Location, Warehouse};
use crate::domain::repositories::{LocationResolver, WarehouseStore};
use crate::domain::value_objects::LocationCode;

use super::commands::{ArchiveWarehouseCommand, CreateWarehouseCommand, ReplaceWarehouseCommand};
use super::queries::GetWarehouseQuery;

/// 仓库服务处理器
///
/// 每个操作都是单次 read-validate-write：规则按固定顺序检查，
/// 首个失败立即中止且不产生任何写入，成功路径恰好一次存储写入。
/// 引擎自身不加锁；同一位置上的并发创建/替换存在 check-then-act
/// 竞争（与原始系统一致），序列化由存储层事务负责。
pub struct ServiceHandler {
    warehouse_store: Arc<dyn WarehouseStore>,
    location_resolver: Arc<dyn LocationResolver>,
}

impl ServiceHandler {
    pub fn new(
        warehouse_store: Arc<dyn WarehouseStore>,
        location_resolver: Arc<dyn LocationResolver>,
    ) -> Self {
        Self {
            warehouse_store,
            location_resolver,
        }
    }

    // ========== 操作 ==========

    /// 创建仓库
    pub async fn create_warehouse(&self, cmd: CreateWarehouseCommand) -> AppResult<Warehouse> {
        info!(
            "Creating warehouse: {} at location: {}",
            cmd.business_unit_code, cmd.location
        );

        // 1. 业务单元编码唯一性
        if self
            .warehouse_store
            .find_by_business_unit_code(&cmd.business_unit_code)
            .await?
            .is_some()
        {
            warn!("Warehouse {} already exists", cmd.business_unit_code);
            return Err(AppError::conflict(format!(
                "Warehouse with business unit code '{}' already exists.",
                cmd.business_unit_code
            )));
        }

        // 2. 位置有效性
        let location = self.resolve_location(&cmd.location).await?;

        // 3. 位置余量（数量）
        let active_at_location = self
            .warehouse_store
            .find_active_by_location(&cmd.location)
            .await?;
        if active_at_location.len() as i32 >= location.max_number_of_warehouses {
            warn!(
                "Location {} already has {} active warehouses",
                cmd.location,
                active_at_location.len()
            );
            return Err(AppError::unprocessable(format!(
                "Maximum number of warehouses ({}) has already been reached for location '{}'.",
                location.max_number_of_warehouses, cmd.location
            )));
        }

        // 4-6. 容量/库存合法性
        Self::check_capacity_and_stock(cmd.capacity, cmd.stock)?;
        if cmd.stock > cmd.capacity {
            return Err(AppError::unprocessable(format!(
                "Warehouse stock ({}) cannot exceed capacity ({}).",
                cmd.stock, cmd.capacity
            )));
        }

        // 7. 位置余量（容量总和）
        let current_total: i32 = active_at_location.iter().map(|w| w.capacity).sum();
        if current_total + cmd.capacity > location.max_capacity {
            warn!(
                "Location {} capacity overshoot: current total {}, requested {}",
                cmd.location, current_total, cmd.capacity
            );
            return Err(AppError::unprocessable(format!(
                "Total capacity at location '{}' would exceed maximum capacity ({}). \
                 Current total: {}, new warehouse capacity: {}.",
                cmd.location, location.max_capacity, current_total, cmd.capacity
            )));
        }

        let candidate = Warehouse::new(
            cmd.business_unit_code,
            cmd.location,
            cmd.capacity,
            cmd.stock,
        );
        let created = self.warehouse_store.create(&candidate).await?;
        info!("Warehouse {} created", created.business_unit_code);
        Ok(created)
    }

    /// 替换仓库
    ///
    /// 有意的不对称：替换不重查数量余量（max_number_of_warehouses），
    /// 因为原地替换不会改变任何位置上的仓库数量。
    pub async fn replace_warehouse(&self, cmd: ReplaceWarehouseCommand) -> AppResult<Warehouse> {
        info!("Replacing warehouse: {}", cmd.business_unit_code);

        // 1. 目标存在性
        let existing = self
            .warehouse_store
            .find_by_business_unit_code(&cmd.business_unit_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Warehouse with business unit code '{}' does not exist.",
                    cmd.business_unit_code
                ))
            })?;

        // 2. 归档守卫
        if existing.archived_at.is_some() {
            warn!(
                "Attempt to replace archived warehouse {}",
                cmd.business_unit_code
            );
            return Err(AppError::unprocessable(format!(
                "Cannot replace an archived warehouse with business unit code '{}'.",
                cmd.business_unit_code
            )));
        }

        // 3. 位置有效性
        let location = self.resolve_location(&cmd.location).await?;

        // 4-5. 容量/库存合法性
        Self::check_capacity_and_stock(cmd.capacity, cmd.stock)?;

        // 6. 库存连续性：替换可以改位置和容量，但必须原样带走库存
        if cmd.stock != existing.stock {
            return Err(AppError::unprocessable(format!(
                "Stock of the new warehouse ({}) must match the stock of the warehouse being \
                 replaced ({}).",
                cmd.stock, existing.stock
            )));
        }

        // 7. 新容量必须装得下库存
        if cmd.capacity < cmd.stock {
            return Err(AppError::unprocessable(format!(
                "New warehouse capacity ({}) must be able to accommodate the stock ({}).",
                cmd.capacity, cmd.stock
            )));
        }

        // 8. 位置余量（容量总和），排除被替换的仓库自身
        let active_at_location = self
            .warehouse_store
            .find_active_by_location(&cmd.location)
            .await?;
        let current_total: i32 = active_at_location
            .iter()
            .filter(|w| w.business_unit_code != existing.business_unit_code)
            .map(|w| w.capacity)
            .sum();
        if current_total + cmd.capacity > location.max_capacity {
            warn!(
                "Location {} capacity overshoot on replace: current total {}, requested {}",
                cmd.location, current_total, cmd.capacity
            );
            return Err(AppError::unprocessable(format!(
                "Total capacity at location '{}' would exceed maximum capacity ({}). \
                 Current total (excluding replaced warehouse): {}, new warehouse capacity: {}.",
                cmd.location, location.max_capacity, current_total, cmd.capacity
            )));
        }

        // 身份、创建时间与归档状态保持不变
        let mut updated = existing;
        updated.location = cmd.location;
        updated.capacity = cmd.capacity;
        updated.stock = cmd.stock;

        self.warehouse_store.update(&updated).await?;
        info!("Warehouse {} replaced", updated.business_unit_code);
        Ok(updated)
    }

    /// 归档仓库
    pub async fn archive_warehouse(&self, cmd: ArchiveWarehouseCommand) -> AppResult<Warehouse> {
        info!("Archiving warehouse: {}", cmd.business_unit_code);

        // 1. 目标存在性
        let existing = self
            .warehouse_store
            .find_by_business_unit_code(&cmd.business_unit_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Warehouse with business unit code '{}' does not exist.",
                    cmd.business_unit_code
                ))
            })?;

        // 2. 重复归档守卫：归档是单调不可逆的
        if existing.archived_at.is_some() {
            warn!(
                "Warehouse {} is already archived",
                cmd.business_unit_code
            );
            return Err(AppError::unprocessable(format!(
                "Warehouse with business unit code '{}' is already archived.",
                cmd.business_unit_code
            )));
        }

        // 其余字段原样带走，只写入归档时间
        let mut archived = existing;
        archived.archive(Utc::now());

        self.warehouse_store.update(&archived).await?;
        info!("Warehouse {} archived", archived.business_unit_code);
        Ok(archived)
    }

    // ========== 查询 ==========

    /// 列表所有仓库
    pub async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>> {
        self.warehouse_store.get_all().await
    }

    /// 按业务单元编码获取仓库
    pub async fn get_warehouse(&self, query: GetWarehouseQuery) -> AppResult<Warehouse> {
        self.warehouse_store
            .find_by_business_unit_code(&query.business_unit_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Warehouse with business unit code '{}' does not exist.",
                    query.business_unit_code
                ))
            })
    }

    // ========== 内部辅助 ==========

    async fn resolve_location(&self, code: &LocationCode) -> AppResult<Location> {
        self.location_resolver
            .resolve_by_code(code)
            .await?
            .ok_or_else(|| AppError::unprocessable(format!("Location '{}' is not valid.", code)))
    }

    fn check_capacity_and_stock(capacity: i32, stock: i32) -> AppResult<()> {
        if capacity <= 0 {
            return Err(AppError::unprocessable(
                "Warehouse capacity must be greater than 0.",
            ));
        }
        if stock < 0 {
            return Err(AppError::unprocessable("Warehouse stock cannot be negative."));
        }
        Ok(())
    }
}
