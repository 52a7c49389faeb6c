//! 实体模块

mod location;
mod warehouse;

pub use location::Location;
pub use warehouse::Warehouse;
