//! Domain model for the blog backend.
//!
//! # Responsibility
//! - Define the canonical Author and Post records and their drafts.
//! - Own field-level validation rules shared by every write path.
//!
//! # Invariants
//! - `id` values are storage-generated and never reused or reassigned.
//! - A Post always belongs to exactly one Author (`author_id`).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author;
pub mod post;

use author::{AuthorId, AuthorValidationError};
use post::PostValidationError;

/// Validation failure for any write-path input.
///
/// `UnknownAuthor` covers the referential case: a Post draft naming an
/// `author_id` that does not exist is a client input error, not a
/// storage fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Author(AuthorValidationError),
    Post(PostValidationError),
    UnknownAuthor(AuthorId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author(err) => write!(f, "{err}"),
            Self::Post(err) => write!(f, "{err}"),
            Self::UnknownAuthor(id) => {
                write!(f, "invalid author_id: author {id} does not exist")
            }
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Author(err) => Some(err),
            Self::Post(err) => Some(err),
            Self::UnknownAuthor(_) => None,
        }
    }
}

impl From<AuthorValidationError> for ValidationError {
    fn from(value: AuthorValidationError) -> Self {
        Self::Author(value)
    }
}

impl From<PostValidationError> for ValidationError {
    fn from(value: PostValidationError) -> Self {
        Self::Post(value)
    }
}
