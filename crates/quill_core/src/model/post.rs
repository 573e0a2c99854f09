//! Post domain model.
//!
//! # Responsibility
//! - Define the Post record, its creation draft and its update patch.
//! - Provide the eager-loaded read model (`PostWithAuthor`).
//!
//! # Invariants
//! - `author_id` is fixed at creation; no patch can move a Post between
//!   Authors.
//! - `title` and `content` are non-empty; `content` length is unbounded.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use super::author::AuthorId;

/// Stable integer identifier for a Post row.
pub type PostId = i64;

/// Field-level validation failure for post input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for PostValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "post title must not be empty"),
            Self::EmptyContent => write!(f, "post content must not be empty"),
        }
    }
}

impl Error for PostValidationError {}

/// Persisted Post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Storage-generated stable id.
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Owning author; immutable after creation.
    pub author_id: AuthorId,
}

/// Creation draft for a Post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: AuthorId,
}

/// Partial update. Ownership is deliberately absent: only `title` and
/// `content` are mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Owner fields attached to eager-loaded post reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBrief {
    pub name: String,
    pub email: String,
}

/// Read model for post list/detail use-cases: the Post plus its owning
/// Author's public fields, fetched in the same query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: AuthorId,
    pub author: AuthorBrief,
}

impl Post {
    pub fn validate(&self) -> Result<(), PostValidationError> {
        validate_fields(&self.title, &self.content)
    }

    /// Applies a partial patch in place. `author_id` stays untouched by
    /// construction.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: AuthorId) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }

    pub fn validate(&self) -> Result<(), PostValidationError> {
        validate_fields(&self.title, &self.content)
    }
}

impl PostWithAuthor {
    /// Projects the plain Post record out of the eager-loaded read model.
    pub fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
        }
    }
}

fn validate_fields(title: &str, content: &str) -> Result<(), PostValidationError> {
    if title.trim().is_empty() {
        return Err(PostValidationError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(PostValidationError::EmptyContent);
    }
    Ok(())
}
