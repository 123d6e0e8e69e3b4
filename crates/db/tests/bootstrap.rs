use lightbnb_db::Store;
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    lightbnb_db::health_check(&pool).await.unwrap();

    // Re-applying the embedded migrations is a no-op.
    lightbnb_db::run_migrations(&pool).await.unwrap();

    for table in ["users", "properties", "reservations", "property_reviews"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_health_check(pool: PgPool) {
    let store = Store::new(pool);
    store.health_check().await.unwrap();
}
