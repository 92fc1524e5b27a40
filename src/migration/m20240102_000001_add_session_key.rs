//! Adds `lead_source.session_key`.
//!
//! Rows written before this migration get the column default, an empty
//! string, rather than NULL.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(LeadSource::Table)
                    .add_column(
                        ColumnDef::new(LeadSource::SessionKey)
                            .string_len(40)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(LeadSource::Table)
                    .drop_column(LeadSource::SessionKey)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum LeadSource {
    Table,
    SessionKey,
}
