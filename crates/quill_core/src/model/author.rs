//! Author domain model.
//!
//! # Responsibility
//! - Define the Author record, its creation draft and its update patch.
//! - Enforce name/email field rules before any persistence attempt.
//!
//! # Invariants
//! - `email` must be syntactically valid and is unique storage-wide
//!   (uniqueness itself is enforced by the storage constraint).
//! - `id` is storage-generated and immutable.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable integer identifier for an Author row.
pub type AuthorId = i64;

// Syntactic check only: one `@`, no whitespace, a dot in the domain.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Field-level validation failure for author input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorValidationError {
    EmptyName,
    EmptyEmail,
    MalformedEmail(String),
}

impl Display for AuthorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "author name must not be empty"),
            Self::EmptyEmail => write!(f, "author email must not be empty"),
            Self::MalformedEmail(value) => write!(f, "malformed author email: `{value}`"),
        }
    }
}

impl Error for AuthorValidationError {}

/// Persisted Author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Storage-generated stable id.
    pub id: AuthorId,
    pub name: String,
    pub email: String,
}

/// Creation draft: everything an Author needs except the generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

/// Partial update: `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Author {
    pub fn validate(&self) -> Result<(), AuthorValidationError> {
        validate_fields(&self.name, &self.email)
    }

    /// Applies a partial patch in place. Does not validate; callers run
    /// `validate()` before persisting the patched record.
    pub fn apply(&mut self, patch: AuthorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthorValidationError> {
        validate_fields(&self.name, &self.email)
    }
}

fn validate_fields(name: &str, email: &str) -> Result<(), AuthorValidationError> {
    if name.trim().is_empty() {
        return Err(AuthorValidationError::EmptyName);
    }
    if email.trim().is_empty() {
        return Err(AuthorValidationError::EmptyEmail);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(AuthorValidationError::MalformedEmail(email.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Author, AuthorPatch, AuthorValidationError, NewAuthor};

    #[test]
    fn draft_validation_accepts_plain_address() {
        assert!(NewAuthor::new("Ada", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn draft_validation_rejects_empty_and_malformed_fields() {
        assert_eq!(
            NewAuthor::new("  ", "ada@example.com").validate(),
            Err(AuthorValidationError::EmptyName)
        );
        assert_eq!(
            NewAuthor::new("Ada", "").validate(),
            Err(AuthorValidationError::EmptyEmail)
        );
        for bad in ["not-an-email", "a@b", "two@@x.com", "spaced @x.com"] {
            assert!(matches!(
                NewAuthor::new("Ada", bad).validate(),
                Err(AuthorValidationError::MalformedEmail(_))
            ));
        }
    }

    #[test]
    fn patch_only_touches_provided_fields() {
        let mut author = Author {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        author.apply(AuthorPatch {
            name: Some("Ada Lovelace".to_string()),
            email: None,
        });
        assert_eq!(author.name, "Ada Lovelace");
        assert_eq!(author.email, "ada@example.com");
    }
}
