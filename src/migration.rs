//! Schema history for the `lead_source` table.
//!
//! Migrations run in the order returned by [`Migrator::migrations`]; each one
//! is reversible and declares the default that existing rows receive.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_lead_source_table;
mod m20240102_000001_add_session_key;

/// Table holding the host application's users. `lead_source.user_id`
/// references its `id` column.
pub const USERS_TABLE: &str = "users";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("utm_tracker_seaorm_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_lead_source_table::Migration),
            Box::new(m20240102_000001_add_session_key::Migration),
        ]
    }
}
