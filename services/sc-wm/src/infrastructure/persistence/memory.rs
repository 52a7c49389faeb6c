//! In-memory repository implementation

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::entities::{Location, Warehouse};
use crate::domain::repositories::{LocationResolver, WarehouseStore};
use crate::domain::value_objects::{BusinessUnitCode, LocationCode};

// ============================================================================
// WarehouseStore 实现
// ============================================================================

/// 进程内仓库存储
///
/// RwLock 只保护 map 自身的完整性，不提供跨操作的序列化——
/// 位置余量的 check-then-act 竞争语义与真实存储一致。
pub struct InMemoryWarehouseStore {
    warehouses: RwLock<HashMap<BusinessUnitCode, Warehouse>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self {
            warehouses: RwLock::new(HashMap::new()),
        }
    }

}

impl Default for InMemoryWarehouseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WarehouseStore for InMemoryWarehouseStore {
    async fn get_all(&self) -> AppResult<Vec<Warehouse>> {
        Ok(self.warehouses.read().await.values().cloned().collect())
    }

    async fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> AppResult<Option<Warehouse>> {
        Ok(self.warehouses.read().await.get(code).cloned())
    }

    async fn find_active_by_location(
        &self,
        location: &LocationCode,
    ) -> AppResult<Vec<Warehouse>> {
        Ok(self
            .warehouses
            .read()
            .await
            .values()
            .filter(|w| &w.location == location && w.archived_at.is_none())
            .cloned()
            .collect())
    }

    async fn create(&self, warehouse: &Warehouse) -> AppResult<Warehouse> {
        let mut warehouses = self.warehouses.write().await;
        if warehouses.contains_key(&warehouse.business_unit_code) {
            // 对应关系数据库里的唯一约束冲突
            return Err(AppError::database(format!(
                "duplicate business unit code '{}'",
                warehouse.business_unit_code
            )));
        }

        let mut record = warehouse.clone();
        record.created_at = Some(Utc::now());
        record.archived_at = None;
        warehouses.insert(record.business_unit_code.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, warehouse: &Warehouse) -> AppResult<()> {
        let mut warehouses = self.warehouses.write().await;
        // 未命中时静默无操作：调用方先行检查存在性
        if let Some(record) = warehouses.get_mut(&warehouse.business_unit_code) {
            record.location = warehouse.location.clone();
            record.capacity = warehouse.capacity;
            record.stock = warehouse.stock;
            if warehouse.archived_at.is_some() {
                record.archived_at = warehouse.archived_at;
            }
        }
        Ok(())
    }

    async fn remove(&self, code: &BusinessUnitCode) -> AppResult<()> {
        self.warehouses.write().await.remove(code);
        Ok(())
    }
}

// ============================================================================
// LocationResolver 实现
// ============================================================================

/// 静态位置解析器
///
/// 位置目录由协作方拥有；这里以固定表模拟只读 oracle
pub struct StaticLocationResolver {
    locations: HashMap<LocationCode, Location>,
}

impl StaticLocationResolver {
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations: locations.into_iter().map(|l| (l.code.clone(), l)).collect(),
        }
    }

    /// 履约网络的既有位置目录
    pub fn with_defaults() -> Self {
        let defaults = [
            ("ZWOLLE-001", 1, 100),
            ("ZWOLLE-002", 2, 150),
            ("AMSTERDAM-001", 5, 100),
            ("AMSTERDAM-002", 3, 200),
            ("TILBURG-001", 2, 90),
            ("HELMOND-001", 1, 45),
            ("EINDHOVEN-001", 2, 70),
        ];

        Self::new(
            defaults
                .into_iter()
                .map(|(code, max_warehouses, max_capacity)| {
                    Location::new(
                        LocationCode::new(code).expect("static location codes are valid"),
                        max_warehouses,
                        max_capacity,
                    )
                })
                .collect(),
        )
    }
}

#[async_trait]
impl LocationResolver for StaticLocationResolver {
    async fn resolve_by_code(&self, code: &LocationCode) -> AppResult<Option<Location>> {
        Ok(self.locations.get(code).cloned())
    }
}
