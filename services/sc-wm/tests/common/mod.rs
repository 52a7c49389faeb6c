#![allow(dead_code)]
//! 测试辅助：装配 handler、构造领域对象

use std::sync::{Arc, Once};

use sc_wm::application::{
    ArchiveWarehouseCommand, CreateWarehouseCommand, ReplaceWarehouseCommand, ServiceHandler,
};
use sc_wm::domain::entities::Location;
use sc_wm::domain::value_objects::{BusinessUnitCode, LocationCode};
use sc_wm::infrastructure::persistence::{InMemoryWarehouseStore, StaticLocationResolver};

static INIT: Once = Once::new();

/// 初始化测试遥测（每个测试二进制只执行一次）
pub fn setup() {
    INIT.call_once(|| {
        let config = config::AppConfig::load("config").unwrap_or_default();
        telemetry::try_init_tracing(&config.telemetry.log_level);
    });
}

pub fn bu(code: &str) -> BusinessUnitCode {
    BusinessUnitCode::new(code).expect("valid business unit code")
}

pub fn loc(code: &str) -> LocationCode {
    LocationCode::new(code).expect("valid location code")
}

pub fn location(code: &str, max_warehouses: i32, max_capacity: i32) -> Location {
    Location::new(loc(code), max_warehouses, max_capacity)
}

/// 生成不会冲突的业务单元编码
pub fn unique_code(prefix: &str) -> BusinessUnitCode {
    bu(&format!(
        "{}.{}",
        prefix,
        &uuid::Uuid::new_v4().simple().to_string()[..8]
    ))
}

/// 基于给定位置目录装配 handler
pub fn handler_with(locations: Vec<Location>) -> (ServiceHandler, Arc<InMemoryWarehouseStore>) {
    setup();
    let store = Arc::new(InMemoryWarehouseStore::new());
    let resolver = Arc::new(StaticLocationResolver::new(locations));
    (ServiceHandler::new(store.clone(), resolver), store)
}

/// 基于默认履约位置目录装配 handler
pub fn default_handler() -> (ServiceHandler, Arc<InMemoryWarehouseStore>) {
    setup();
    let store = Arc::new(InMemoryWarehouseStore::new());
    let resolver = Arc::new(StaticLocationResolver::with_defaults());
    (ServiceHandler::new(store.clone(), resolver), store)
}

pub fn create_cmd(code: &str, location: &str, capacity: i32, stock: i32) -> CreateWarehouseCommand {
    CreateWarehouseCommand {
        business_unit_code: bu(code),
        location: loc(location),
        capacity,
        stock,
    }
}

pub fn replace_cmd(
    code: &str,
    location: &str,
    capacity: i32,
    stock: i32,
) -> ReplaceWarehouseCommand {
    ReplaceWarehouseCommand {
        business_unit_code: bu(code),
        location: loc(location),
        capacity,
        stock,
    }
}

pub fn archive_cmd(code: &str) -> ArchiveWarehouseCommand {
    ArchiveWarehouseCommand {
        business_unit_code: bu(code),
    }
}
