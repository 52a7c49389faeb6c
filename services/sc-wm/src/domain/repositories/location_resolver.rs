//! 位置解析接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::Location;
use crate::domain::value_objects::LocationCode;

/// 位置解析接口
///
/// 只读 oracle：给定位置编码，返回其容量约束或 None
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve_by_code(&self, code: &LocationCode) -> AppResult<Option<Location>>;
}
