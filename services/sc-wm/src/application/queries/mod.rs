//! 查询模块

mod warehouse_queries;

pub use warehouse_queries::{GetWarehouseQuery, ListWarehousesQuery};
