use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    palette_db::health_check(&pool).await.unwrap();

    for table in ["users", "color_collections"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// A collection row cannot reference a user that does not exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_collection_requires_existing_owner(pool: PgPool) {
    let result = sqlx::query("INSERT INTO color_collections (user_id, name) VALUES (424242, 'Orphan')")
        .execute(&pool)
        .await;

    let err = result.expect_err("insert with unknown user_id must fail");
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

/// Every migration shipped with the crate is recorded as applied.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migration_counts_agree(pool: PgPool) {
    let applied = palette_db::applied_migrations(&pool).await.unwrap();

    assert_eq!(palette_db::known_migrations(), 2);
    assert_eq!(applied, 2);
}
