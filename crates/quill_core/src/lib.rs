//! Core domain logic for the Quill blog backend.
//! This crate is the single source of truth for the Author/Post data
//! contract: field validation, email uniqueness, referential integrity
//! and cascade deletion.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::{Author, AuthorId, AuthorPatch, AuthorValidationError, NewAuthor};
pub use model::post::{
    AuthorBrief, NewPost, Post, PostId, PostPatch, PostValidationError, PostWithAuthor,
};
pub use model::ValidationError;
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::post_service::PostService;

/// Returns the core crate version, surfaced by the transport's health
/// probe.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
