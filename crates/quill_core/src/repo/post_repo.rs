//! Post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `posts` table.
//! - Eager-load the owning author for list/detail reads in one JOIN, so
//!   no read path issues one query per post.
//!
//! # Invariants
//! - `create_post` checks the author exists before inserting; the foreign
//!   key constraint backstops the check against a concurrent author
//!   delete, and both paths report the same validation error.
//! - `update_post` never touches `author_id`.

use crate::model::author::AuthorId;
use crate::model::post::{AuthorBrief, NewPost, Post, PostId, PostWithAuthor};
use crate::model::ValidationError;
use crate::repo::{extended_code, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT id, title, content, author_id FROM posts";

const POST_WITH_AUTHOR_SELECT_SQL: &str = "SELECT
    p.id,
    p.title,
    p.content,
    p.author_id,
    a.name AS author_name,
    a.email AS author_email
FROM posts p
JOIN authors a ON a.id = p.author_id";

/// Optional filters for listing posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostListQuery {
    /// When set, only posts owned by this author are returned.
    pub author_id: Option<AuthorId>,
}

/// Repository interface for post CRUD operations.
pub trait PostRepository {
    /// Inserts a validated draft and returns the stored record.
    fn create_post(&self, draft: &NewPost) -> RepoResult<Post>;
    /// Lists posts in creation (id) order with owners eager-loaded.
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<PostWithAuthor>>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<PostWithAuthor>>;
    /// Replaces title/content of an existing post. Ownership is immutable.
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
    /// Lists one author's posts; fails with `AuthorNotFound` when the
    /// author is absent. No author attachment, the parent is already known.
    fn list_posts_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Post>>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn author_exists(&self, author_id: AuthorId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?1);",
            params![author_id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, draft: &NewPost) -> RepoResult<Post> {
        draft.validate().map_err(ValidationError::from)?;

        // Advisory check for a clean client-facing message; the foreign
        // key constraint below is the correctness backstop if the author
        // disappears between check and insert.
        if !self.author_exists(draft.author_id)? {
            return Err(ValidationError::UnknownAuthor(draft.author_id).into());
        }

        self.conn
            .execute(
                "INSERT INTO posts (title, content, author_id) VALUES (?1, ?2, ?3);",
                params![draft.title, draft.content, draft.author_id],
            )
            .map_err(|err| map_fk_violation(err, draft.author_id))?;

        Ok(Post {
            id: self.conn.last_insert_rowid(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            author_id: draft.author_id,
        })
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<PostWithAuthor>> {
        let mut sql = POST_WITH_AUTHOR_SELECT_SQL.to_string();
        if query.author_id.is_some() {
            sql.push_str(" WHERE p.author_id = ?1");
        }
        sql.push_str(" ORDER BY p.id ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = match query.author_id {
            Some(author_id) => stmt.query(params![author_id])?,
            None => stmt.query([])?,
        };

        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_with_author_row(row)?);
        }
        Ok(posts)
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<PostWithAuthor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_WITH_AUTHOR_SELECT_SQL} WHERE p.id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_with_author_row(row)?));
        }
        Ok(None)
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        post.validate().map_err(ValidationError::from)?;

        let changed = self.conn.execute(
            "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3;",
            params![post.title, post.content, post.id],
        )?;

        if changed == 0 {
            return Err(RepoError::PostNotFound(post.id));
        }
        Ok(())
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::PostNotFound(id));
        }
        Ok(())
    }

    fn list_posts_by_author(&self, author_id: AuthorId) -> RepoResult<Vec<Post>> {
        if !self.author_exists(author_id)? {
            return Err(RepoError::AuthorNotFound(author_id));
        }

        let mut stmt = self.conn.prepare(&format!(
            "{POST_SELECT_SQL} WHERE author_id = ?1 ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query(params![author_id])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }
        Ok(posts)
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    Ok(Post {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        author_id: row.get("author_id")?,
    })
}

fn parse_post_with_author_row(row: &Row<'_>) -> RepoResult<PostWithAuthor> {
    Ok(PostWithAuthor {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        author_id: row.get("author_id")?,
        author: AuthorBrief {
            name: row.get("author_name")?,
            email: row.get("author_email")?,
        },
    })
}

fn map_fk_violation(err: rusqlite::Error, author_id: AuthorId) -> RepoError {
    if extended_code(&err) == Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) {
        return ValidationError::UnknownAuthor(author_id).into();
    }
    err.into()
}
