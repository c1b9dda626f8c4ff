//! Database store for the villa admin API
//!
//! ## Design Decisions
//!
//! ### Nested villa structures
//! - **JSONB columns**: house rules, amenities, nearby places and sleeping
//!   arrangements are stored as JSONB and decoded into their payload types
//!   with `sqlx::types::Json`, so the shape is checked at the boundary.
//! - **Normalized before writing**: villas are normalized and validated here,
//!   not trusted from the client. Empty collections are stored as NULL.
//!
//! ### Time Source Dependency
//! - `created_at`, `updated_at` and `published_at` are bound from a
//!   `TimeSource` rather than the database clock, so tests can mock time.
//!
//! ### Missing tables
//! - Postgres reports a missing relation as `42P01`. That is surfaced as
//!   [`StoreError::MissingCollection`] rather than a generic database error
//!   so the admin can be told to run migrations.

use payloads::requests::ValidationError;

pub mod blog;
pub mod booking;
pub mod villa;

pub use blog::*;
pub use booking::*;
pub use villa::*;

/// Postgres SQLSTATE for "undefined_table".
const UNDEFINED_TABLE: &str = "42P01";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Villa not found")]
    VillaNotFound,
    #[error("Blog post not found")]
    BlogPostNotFound,
    #[error("A blog post with this slug already exists")]
    SlugNotUnique,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Table does not exist. Please run migration.")]
    MissingCollection(#[source] sqlx::Error),
    #[error("Unique constraint violation")]
    NotUnique(#[source] sqlx::Error),
    #[error("Database error")]
    Database(#[source] sqlx::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return StoreError::NotUnique(e);
            }
            if db_err.code().as_deref() == Some(UNDEFINED_TABLE) {
                return StoreError::MissingCollection(e);
            }
        }
        StoreError::Database(e)
    }
}

/// Map a missing row to `not_found`, leaving other errors to the usual
/// conversion.
fn or_not_found(not_found: StoreError) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| match e {
        sqlx::Error::RowNotFound => not_found,
        e => e.into(),
    }
}
