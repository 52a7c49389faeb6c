//! 值对象模块

mod business_unit_code;
mod location_code;

pub use business_unit_code::{BusinessUnitCode, BusinessUnitCodeError};
pub use location_code::{LocationCode, LocationCodeError};
