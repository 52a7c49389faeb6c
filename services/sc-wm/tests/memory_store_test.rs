//! 进程内存储适配器的契约测试

mod common;

use chrono::Utc;
use common::*;
use errors::AppError;
use sc_wm::domain::entities::Warehouse;
use sc_wm::domain::repositories::WarehouseStore;
use sc_wm::infrastructure::persistence::InMemoryWarehouseStore;

fn candidate(code: &str, location: &str, capacity: i32, stock: i32) -> Warehouse {
    Warehouse::new(bu(code), loc(location), capacity, stock)
}

/// create 填充 created_at 并强制 archived_at 为空
#[tokio::test]
async fn test_create_stamps_timestamps() {
    setup();
    let store = InMemoryWarehouseStore::new();

    let mut w = candidate("MWH.001", "ZWOLLE-001", 100, 0);
    // 输入侧的时间戳被忽略
    w.archived_at = Some(Utc::now());

    let created = store.create(&w).await.unwrap();
    assert!(created.created_at.is_some());
    assert!(created.archived_at.is_none());
}

/// 重复插入对应唯一约束冲突
#[tokio::test]
async fn test_create_duplicate_is_database_error() {
    setup();
    let store = InMemoryWarehouseStore::new();
    let w = candidate("MWH.001", "ZWOLLE-001", 100, 0);

    store.create(&w).await.unwrap();
    let err = store.create(&w).await.unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
}

/// update 只覆盖可变字段，created_at 不变
#[tokio::test]
async fn test_update_overwrites_mutable_fields_only() {
    setup();
    let store = InMemoryWarehouseStore::new();
    let created = store
        .create(&candidate("MWH.001", "ZWOLLE-001", 100, 10))
        .await
        .unwrap();

    let mut updated = created.clone();
    updated.location = loc("AMSTERDAM-001");
    updated.capacity = 80;
    updated.stock = 10;
    store.update(&updated).await.unwrap();

    let stored = store
        .find_by_business_unit_code(&bu("MWH.001"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.location, loc("AMSTERDAM-001"));
    assert_eq!(stored.capacity, 80);
    assert_eq!(stored.created_at, created.created_at);
    assert!(stored.archived_at.is_none());
}

/// update 的归档时间只写不清：传 None 不会取消归档
#[tokio::test]
async fn test_update_never_clears_archival() {
    setup();
    let store = InMemoryWarehouseStore::new();
    let created = store
        .create(&candidate("MWH.001", "ZWOLLE-001", 100, 0))
        .await
        .unwrap();

    let mut archived = created.clone();
    archived.archive(Utc::now());
    store.update(&archived).await.unwrap();

    let mut resurrect = created.clone();
    resurrect.archived_at = None;
    store.update(&resurrect).await.unwrap();

    let stored = store
        .find_by_business_unit_code(&bu("MWH.001"))
        .await
        .unwrap()
        .unwrap();
    assert!(stored.archived_at.is_some());
}

/// 未命中的 update 是静默无操作（调用方先行检查存在性）
#[tokio::test]
async fn test_update_unknown_code_is_noop() {
    setup();
    let store = InMemoryWarehouseStore::new();

    let result = store
        .update(&candidate("MWH.404", "ZWOLLE-001", 10, 0))
        .await;
    assert!(result.is_ok());
    assert!(store.get_all().await.unwrap().is_empty());
}

/// remove 物理删除
#[tokio::test]
async fn test_remove_hard_deletes() {
    setup();
    let store = InMemoryWarehouseStore::new();
    let code = unique_code("MWH");
    store
        .create(&Warehouse::new(code.clone(), loc("ZWOLLE-001"), 10, 0))
        .await
        .unwrap();

    store.remove(&code).await.unwrap();
    assert!(
        store
            .find_by_business_unit_code(&code)
            .await
            .unwrap()
            .is_none()
    );
}

/// 活跃查询按位置过滤并排除归档记录
#[tokio::test]
async fn test_find_active_by_location_filters() {
    setup();
    let store = InMemoryWarehouseStore::new();

    store
        .create(&candidate("MWH.001", "ZWOLLE-001", 10, 0))
        .await
        .unwrap();
    store
        .create(&candidate("MWH.002", "AMSTERDAM-001", 10, 0))
        .await
        .unwrap();
    let mut archived = store
        .create(&candidate("MWH.003", "ZWOLLE-001", 10, 0))
        .await
        .unwrap();
    archived.archive(Utc::now());
    store.update(&archived).await.unwrap();

    let active = store
        .find_active_by_location(&loc("ZWOLLE-001"))
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].business_unit_code, bu("MWH.001"));

    // get_all 包含归档记录
    assert_eq!(store.get_all().await.unwrap().len(), 3);
}
