use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteStore;

#[tokio::test]
async fn sqlite_roundtrip_set_get_delete() {
    let store = SqliteStore::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    assert_eq!(store.get("progress-ana-spanish").await.unwrap(), None);

    store
        .set("progress-ana-spanish", r#"{"currentCard":2}"#)
        .await
        .unwrap();
    let fetched = store.get("progress-ana-spanish").await.expect("fetch");
    assert_eq!(fetched.as_deref(), Some(r#"{"currentCard":2}"#));

    store.delete("progress-ana-spanish").await.unwrap();
    assert_eq!(store.get("progress-ana-spanish").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_set_overwrites_last_write_wins() {
    let store = SqliteStore::connect("sqlite:file:memdb_kv_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("migrate");

    store.set("current-user", "ana").await.unwrap();
    store.set("current-user", "luis").await.unwrap();
    assert_eq!(
        store.get("current-user").await.unwrap().as_deref(),
        Some("luis")
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_entries")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let store = SqliteStore::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    store.migrate().await.expect("first migrate");
    store.set("current-language", "german").await.unwrap();
    store.migrate().await.expect("second migrate");
    assert_eq!(
        store.get("current-language").await.unwrap().as_deref(),
        Some("german")
    );
}

#[tokio::test]
async fn storage_sqlite_constructor_migrates() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.delete("missing").await.unwrap();
    storage.kv.set("k", "v").await.unwrap();
    assert_eq!(storage.kv.get("k").await.unwrap().as_deref(), Some("v"));
}
