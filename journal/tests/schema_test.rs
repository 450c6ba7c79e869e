//! Storage-boundary tests: the schema itself rejects values outside the enum sets

use std::sync::Arc;

use chrono::Utc;
use journal::entity::users;
use journal::{get_db_connection, Config, TradeRepository};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbBackend, Statement,
};

async fn setup_db() -> Arc<DatabaseConnection> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        sql_logging: false,
    };
    let db = get_db_connection(&config).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

async fn create_user(db: &DatabaseConnection) -> i32 {
    users::ActiveModel {
        username: Set("raw-sql".to_string()),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

async fn raw_insert(db: &DatabaseConnection, user_id: i32, column: &str, value: &str) -> bool {
    let sql = format!(
        "INSERT INTO trades (user_id, symbol, {column}, screenshots, tags, created_at) \
         VALUES ({user_id}, 'EURUSD', '{value}', '[]', '[]', '2025-03-03T08:00:00+00:00')"
    );
    db.execute(Statement::from_string(DbBackend::Sqlite, sql))
        .await
        .is_ok()
}

#[tokio::test]
async fn test_check_constraints_accept_labels() {
    let db = setup_db().await;
    let user_id = create_user(&db).await;

    assert!(raw_insert(&db, user_id, "outcome", "Breakeven").await);
    assert!(raw_insert(&db, user_id, "emotional_state", "Frustrated").await);
    assert!(raw_insert(&db, user_id, "plan_adherence", "No Plan").await);
}

#[tokio::test]
async fn test_check_constraints_reject_foreign_values() {
    let db = setup_db().await;
    let user_id = create_user(&db).await;

    assert!(!raw_insert(&db, user_id, "outcome", "Lose").await);
    assert!(!raw_insert(&db, user_id, "outcome", "win").await);
    assert!(!raw_insert(&db, user_id, "emotional_state", "Bored").await);
    assert!(!raw_insert(&db, user_id, "plan_adherence", "NoPlan").await);
}

#[tokio::test]
async fn test_foreign_value_fails_to_load() {
    let db = setup_db().await;
    let user_id = create_user(&db).await;

    db.execute_unprepared("PRAGMA ignore_check_constraints = ON")
        .await
        .unwrap();
    assert!(raw_insert(&db, user_id, "outcome", "Scratch").await);

    let repo = TradeRepository::new(db.clone());
    assert!(repo.list_for_user(user_id).await.is_err());
}
