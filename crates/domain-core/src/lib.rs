//! domain-core - 跨 context 的领域核心类型
//!
//! 包含极少数需要跨 bounded context 共享的领域基础 trait

mod entity;

pub use entity::*;
