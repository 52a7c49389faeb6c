//! 持久化适配器
//!
//! SQL 适配器不在本服务范围内；这里提供进程内实现，
//! 供测试与本地装配使用。

mod memory;

pub use memory::{InMemoryWarehouseStore, StaticLocationResolver};
