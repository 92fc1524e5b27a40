use sea_orm::DbErr;
use time::OffsetDateTime;

/// Errors returned by the lead-source store and parameter validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required UTM parameter was absent or empty.
    ///
    /// Carries the query-string key (`utm_medium` or `utm_source`) so callers
    /// can report which parameter was missing.
    #[error("missing utm param: {0}")]
    MissingParam(&'static str),

    /// An event time that cannot be represented by the database layer.
    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(OffsetDateTime),

    /// Any failure from the underlying store, passed through untouched.
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
