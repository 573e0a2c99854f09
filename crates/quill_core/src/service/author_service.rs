//! Author use-case service.
//!
//! # Responsibility
//! - Provide stable author CRUD entry points for transport callers.
//! - Resolve absent ids into `AuthorNotFound` before any mutation, so
//!   updates and deletes are never silent no-ops.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - `update` applies partial field replacement; untouched fields keep
//!   their stored values.

use crate::model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::repo::author_repo::AuthorRepository;
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new author and returns it with its generated id.
    pub fn create(&self, draft: NewAuthor) -> RepoResult<Author> {
        self.repo.create_author(&draft)
    }

    /// Lists all authors in creation order.
    pub fn list(&self) -> RepoResult<Vec<Author>> {
        self.repo.list_authors()
    }

    /// Gets one author by id, failing with `AuthorNotFound` when absent.
    pub fn get(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo
            .get_author(id)?
            .ok_or(RepoError::AuthorNotFound(id))
    }

    /// Applies a partial patch and returns the updated record.
    pub fn update(&self, id: AuthorId, patch: AuthorPatch) -> RepoResult<Author> {
        let mut author = self.get(id)?;
        author.apply(patch);
        self.repo.update_author(&author)?;
        Ok(author)
    }

    /// Deletes the author and, atomically, every post it owns.
    pub fn delete(&self, id: AuthorId) -> RepoResult<()> {
        self.repo.delete_author(id)
    }
}
