use jc_db::Database;
use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let db = Database::in_memory()
        .await
        .expect("Failed to create test database");

    db.pool().clone()
}
