//! Database entity models for utm-tracker-seaorm.
//!
//! The only entity here is `lead_source`. The user it points at belongs to
//! the host application and is referenced by id.

/// Lead source entity model for Sea-ORM database interaction.
pub mod lead_source;
