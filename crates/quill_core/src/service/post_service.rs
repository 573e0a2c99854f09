//! Post use-case service.
//!
//! # Responsibility
//! - Provide post CRUD entry points including the author-filtered list
//!   and the per-author listing.
//!
//! # Invariants
//! - List/detail reads return `PostWithAuthor` (owner eager-loaded by the
//!   repository in the same query).
//! - `update` can change title/content only; ownership never moves.

use crate::model::author::AuthorId;
use crate::model::post::{NewPost, Post, PostId, PostPatch, PostWithAuthor};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::{RepoError, RepoResult};

/// Use-case service wrapper for post operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new post. Fails with a validation error when the draft
    /// names an author that does not exist.
    pub fn create(&self, draft: NewPost) -> RepoResult<Post> {
        self.repo.create_post(&draft)
    }

    /// Lists posts, optionally filtered to one author, each with its
    /// owner's name/email attached.
    pub fn list(&self, query: PostListQuery) -> RepoResult<Vec<PostWithAuthor>> {
        self.repo.list_posts(&query)
    }

    /// Gets one post with its owner attached, or `PostNotFound`.
    pub fn get(&self, id: PostId) -> RepoResult<PostWithAuthor> {
        self.repo.get_post(id)?.ok_or(RepoError::PostNotFound(id))
    }

    /// Applies a partial title/content patch and returns the updated
    /// record. `author_id` is preserved by construction.
    pub fn update(&self, id: PostId, patch: PostPatch) -> RepoResult<Post> {
        let mut post = self.get(id)?.into_post();
        post.apply(patch);
        self.repo.update_post(&post)?;
        Ok(post)
    }

    /// Deletes one post by id.
    pub fn delete(&self, id: PostId) -> RepoResult<()> {
        self.repo.delete_post(id)
    }

    /// Lists one author's posts, failing with `AuthorNotFound` when the
    /// author is absent.
    pub fn list_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Post>> {
        self.repo.list_posts_by_author(author_id)
    }
}
