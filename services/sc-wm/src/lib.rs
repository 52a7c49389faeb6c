//! sc-wm - 履约仓库管理服务
//!
//! 仓库生命周期与位置容量分配引擎：创建 / 替换 / 归档三个操作，
//! 通过 WarehouseStore 和 LocationResolver 两个端口与外部协作。

pub mod application;
pub mod domain;
pub mod infrastructure;
