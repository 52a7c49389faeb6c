//! 命令模块

mod warehouse_commands;

pub use warehouse_commands::{
    ArchiveWarehouseCommand, CreateWarehouseCommand, ReplaceWarehouseCommand,
};
