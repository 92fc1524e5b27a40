//! Shared setup for the SQLite-backed integration tests.

#![allow(dead_code)]

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use utm_tracker_seaorm::migration::{Migrator, MigratorTrait};

/// Opens a private in-memory database with a host-side `users` table.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn connect() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory database");

    db.execute_unprepared(
        "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, email TEXT NOT NULL)",
    )
    .await
    .expect("Failed to create users table");

    db
}

/// Same as [`connect`] with every migration applied.
pub async fn migrated() -> DatabaseConnection {
    let db = connect().await;
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

pub async fn add_user(db: &DatabaseConnection, email: &str) -> i64 {
    let res = db
        .execute_unprepared(&format!("INSERT INTO users (email) VALUES ('{email}')"))
        .await
        .expect("Failed to insert user");
    res.last_insert_id() as i64
}
