//! Lead source entity model for Sea-ORM database interaction.
//!
//! This module defines the database schema representation for inbound
//! attribution events. It maps to the `lead_source` table created by the
//! crate's migrations.

use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;

/// Sea-ORM entity model representing one inbound-attribution event.
///
/// A user may have many lead sources: one user can arrive through several
/// routes (several ads, an email and later a referral), and this table records
/// every one of them. Deciding which route "won" is left to later analysis.
///
/// The attribution fields follow the standard UTM parameters. Internal
/// referrals have no `utm_*` values of their own but can reuse the columns,
/// e.g. `medium = "referral"`, `source = "internal"`, `term = <referral token>`.
///
/// # Database Schema
///
/// | Column      | Type               | Description                                 |
/// |-------------|--------------------|---------------------------------------------|
/// | id          | BIGINT (PK)        | Assigned on insert                          |
/// | user_id     | BIGINT (FK)        | `users.id`, cascades on delete              |
/// | medium      | VARCHAR(30)        | `utm_medium`, e.g. "cpc", "email"           |
/// | source      | VARCHAR(30)        | `utm_source`, the site that sent the visit  |
/// | campaign    | VARCHAR(100)       | `utm_campaign`, default ""                  |
/// | term        | VARCHAR(50)        | `utm_term`, default ""                      |
/// | content     | VARCHAR(50)        | `utm_content`, default ""                   |
/// | timestamp   | TIMESTAMPTZ        | When the event occurred                     |
/// | session_key | VARCHAR(40)        | Session active at capture, default ""       |
/// | created_at  | TIMESTAMPTZ        | When the row was recorded                   |
///
/// Rows are never updated once written; see the [`ActiveModelBehavior`] impl.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lead_source")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owning user. The foreign key itself is declared by the migration since
    /// the user entity belongs to the host application.
    pub user_id: i64,

    /// `utm_medium`: what type of link was used, such as cost per click or email.
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub medium: String,

    /// `utm_source`: which site sent the traffic.
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub source: String,

    /// `utm_campaign`: a specific product promotion or strategic campaign.
    ///
    /// Wider than the other fields since email tools autogenerate these.
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub campaign: String,

    /// `utm_term`: search terms.
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub term: String,

    /// `utm_content`: what was clicked, such as a banner ad or a text link.
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub content: String,

    /// When the event occurred. Differs from `created_at` for backfilled rows.
    pub timestamp: DateTimeWithTimeZone,

    /// The session in which the params were captured.
    #[sea_orm(column_type = "String(StringLen::N(40))")]
    pub session_key: String,

    /// When the event was recorded.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            return Err(DbErr::Custom("lead sources are immutable".to_owned()));
        }
        Ok(self)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lead source {} for user {}: {}/{}",
            self.id, self.user_id, self.medium, self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn display_names_user_and_channel() {
        let at: DateTimeWithTimeZone = Utc.with_ymd_and_hms(2021, 1, 19, 19, 27, 0).unwrap().into();
        let model = Model {
            id: 7,
            user_id: 3,
            medium: "cpc".into(),
            source: "google".into(),
            campaign: String::new(),
            term: String::new(),
            content: String::new(),
            timestamp: at,
            session_key: String::new(),
            created_at: at,
        };

        assert_eq!(model.to_string(), "Lead source 7 for user 3: cpc/google");
    }
}
