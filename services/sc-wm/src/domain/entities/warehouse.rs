//! 仓库聚合根

use chrono::{DateTime, Utc};
use domain_core::{AggregateRoot, Entity};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BusinessUnitCode, LocationCode};

/// 仓库聚合根
///
/// 持久化不变式：stock <= capacity。
/// 生命周期：创建（created_at 由存储填充，archived_at = None）→
/// 替换（仅 location/capacity/stock 可变）→ 归档（archived_at 一次性写入，不可逆）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// 业务单元编码（业务主键，创建后不可变更）
    pub business_unit_code: BusinessUnitCode,
    /// 所在位置
    pub location: LocationCode,
    /// 容量
    pub capacity: i32,
    /// 库存
    pub stock: i32,
    /// 创建时间，由存储在首次持久化时填充
    pub created_at: Option<DateTime<Utc>>,
    /// 归档时间；None 表示活跃
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    /// 创建候选仓库（来自边界层的输入，时间戳尚未填充）
    pub fn new(
        business_unit_code: BusinessUnitCode,
        location: LocationCode,
        capacity: i32,
        stock: i32,
    ) -> Self {
        Self {
            business_unit_code,
            location,
            capacity,
            stock,
            created_at: None,
            archived_at: None,
        }
    }

    /// 归档仓库
    pub fn archive(&mut self, at: DateTime<Utc>) {
        if self.archived_at.is_none() {
            self.archived_at = Some(at);
        }
    }
}

impl Entity for Warehouse {
    type Id = BusinessUnitCode;

    fn id(&self) -> &Self::Id {
        &self.business_unit_code
    }
}

impl AggregateRoot for Warehouse {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }
}
