//! 领域层
//!
//! 包含实体、值对象和仓储（端口）接口

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
