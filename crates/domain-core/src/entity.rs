//! 实体基础 trait

use chrono::{DateTime, Utc};

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 聚合根 trait
///
/// 本平台的聚合根携带创建/归档生命周期：记录由存储在首次持久化时
/// 打上创建时间戳，归档一旦发生不可逆转。
pub trait AggregateRoot: Entity {
    /// 创建时间；候选值（尚未持久化）为 None
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// 归档时间；None 表示活跃
    fn archived_at(&self) -> Option<DateTime<Utc>>;

    /// 是否活跃
    fn is_active(&self) -> bool {
        self.archived_at().is_none()
    }
}
