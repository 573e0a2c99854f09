//! Author repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `authors` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Duplicate-email writes surface as `RepoError::Conflict` and leave
//!   stored rows untouched.
//! - `delete_author` removes the author's posts in the same statement via
//!   the schema-level cascade.

use crate::model::author::{Author, AuthorId, NewAuthor};
use crate::model::ValidationError;
use crate::repo::{extended_code, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT id, name, email FROM authors";

/// Repository interface for author CRUD operations.
pub trait AuthorRepository {
    /// Inserts a validated draft and returns the stored record.
    fn create_author(&self, draft: &NewAuthor) -> RepoResult<Author>;
    /// Lists all authors in creation (id) order.
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Replaces mutable fields of an existing author.
    fn update_author(&self, author: &Author) -> RepoResult<()>;
    /// Deletes the author and, through the cascade, every owned post.
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, draft: &NewAuthor) -> RepoResult<Author> {
        draft.validate().map_err(ValidationError::from)?;

        self.conn
            .execute(
                "INSERT INTO authors (name, email) VALUES (?1, ?2);",
                params![draft.name, draft.email],
            )
            .map_err(|err| map_email_conflict(err, &draft.email))?;

        Ok(Author {
            id: self.conn.last_insert_rowid(),
            name: draft.name.clone(),
            email: draft.email.clone(),
        })
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }
        Ok(authors)
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }
        Ok(None)
    }

    fn update_author(&self, author: &Author) -> RepoResult<()> {
        author.validate().map_err(ValidationError::from)?;

        let changed = self
            .conn
            .execute(
                "UPDATE authors SET name = ?1, email = ?2 WHERE id = ?3;",
                params![author.name, author.email, author.id],
            )
            .map_err(|err| map_email_conflict(err, &author.email))?;

        if changed == 0 {
            return Err(RepoError::AuthorNotFound(author.id));
        }
        Ok(())
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        // Single statement; SQLite applies the ON DELETE CASCADE to posts
        // atomically with the author row.
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::AuthorNotFound(id));
        }
        Ok(())
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
    })
}

fn map_email_conflict(err: rusqlite::Error, email: &str) -> RepoError {
    if extended_code(&err) == Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE) {
        return RepoError::Conflict {
            field: "email",
            value: email.to_string(),
        };
    }
    err.into()
}
