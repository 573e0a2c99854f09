//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for authors/posts.
//! - Isolate SQL details from service/business orchestration.
//! - Map SQLite constraint violations to semantic errors.
//!
//! # Invariants
//! - Repository writes validate domain input before SQL mutations.
//! - Uniqueness and referential integrity are ultimately enforced by the
//!   storage constraints; pre-write checks only improve error messages.

use crate::db::DbError;
use crate::model::author::AuthorId;
use crate::model::post::PostId;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod post_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic error for author/post persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Missing, empty or malformed input, including unknown `author_id`
    /// on post creation.
    Validation(ValidationError),
    /// Uniqueness violation; state is unchanged.
    Conflict { field: &'static str, value: String },
    AuthorNotFound(AuthorId),
    PostNotFound(PostId),
    /// Engine-level failure not otherwise classified.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict { field, value } => {
                write!(f, "{field} `{value}` is already in use")
            }
            Self::AuthorNotFound(id) => write!(f, "Author not found: {id}"),
            Self::PostNotFound(id) => write!(f, "Post not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Conflict { .. } => None,
            Self::AuthorNotFound(_) | Self::PostNotFound(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Returns the SQLite extended result code, if the error carries one.
pub(crate) fn extended_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(inner, _) => Some(inner.extended_code),
        _ => None,
    }
}
