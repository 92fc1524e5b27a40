//! Creates the `lead_source` table.
//!
//! `session_key` is not part of the initial schema; it arrives in the next
//! migration.

use sea_orm_migration::prelude::*;

use super::USERS_TABLE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeadSource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeadSource::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeadSource::UserId).big_integer().not_null())
                    .col(ColumnDef::new(LeadSource::Medium).string_len(30).not_null())
                    .col(ColumnDef::new(LeadSource::Source).string_len(30).not_null())
                    .col(
                        ColumnDef::new(LeadSource::Campaign)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LeadSource::Term)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LeadSource::Content)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(LeadSource::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(LeadSource::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lead_source_user")
                            .from(LeadSource::Table, LeadSource::UserId)
                            .to(Alias::new(USERS_TABLE), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // latest-by-timestamp lookups per user
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lead_source_user_timestamp")
                    .table(LeadSource::Table)
                    .col(LeadSource::UserId)
                    .col(LeadSource::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_lead_source_user_timestamp").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LeadSource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeadSource {
    Table,
    Id,
    UserId,
    Medium,
    Source,
    Campaign,
    Term,
    Content,
    Timestamp,
    CreatedAt,
}
