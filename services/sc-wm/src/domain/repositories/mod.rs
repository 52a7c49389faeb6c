//! 仓储（端口）接口模块

mod location_resolver;
mod warehouse_store;

pub use location_resolver::LocationResolver;
pub use warehouse_store::WarehouseStore;
