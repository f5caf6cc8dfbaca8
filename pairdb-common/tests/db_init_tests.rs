//! Tests for database initialization and schema constraints

use pairdb_common::db::init_database;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pairdb.db");

    let result = init_database(&db_path).await;
    assert!(
        result.is_ok(),
        "Database initialization failed: {:?}",
        result.err()
    );

    // Verify database file was created
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pairdb.db");

    // Create database first time
    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());
    drop(pool1);

    // Open database second time (should succeed)
    let pool2 = init_database(&db_path).await;
    assert!(
        pool2.is_ok(),
        "Failed to open existing database: {:?}",
        pool2.err()
    );
}

#[tokio::test]
async fn test_pdb_code_is_unique() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("pairdb.db")).await.unwrap();

    sqlx::query("INSERT INTO pdb (code) VALUES ('1ABC')")
        .execute(&pool)
        .await
        .unwrap();

    let duplicate = sqlx::query("INSERT INTO pdb (code) VALUES ('1ABC')")
        .execute(&pool)
        .await;
    assert!(duplicate.is_err(), "Duplicate code insert should fail");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pdb")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_results_require_existing_parent() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&dir.path().join("pairdb.db")).await.unwrap();

    // pdb_id 42 does not exist, so the foreign key must reject the row
    let orphan = sqlx::query(
        r#"
        INSERT INTO results (pdb_id, residue1, residue2, distance, angle,
                             angle_p, angle1, seq1, seq2, code)
        VALUES (42, 'PHE', 'ASP', 3.5, 10.0, 20.0, 30.0, 1, 2, 'AB')
        "#,
    )
    .execute(&pool)
    .await;

    assert!(orphan.is_err(), "Orphan results row should be rejected");
}
