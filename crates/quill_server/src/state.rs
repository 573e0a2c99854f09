//! Shared application state.
//!
//! The storage client is constructed once at startup and handed to the
//! router; handlers never reach for a global connection.

use crate::error::ApiError;
use quill_core::RepoResult;
use rusqlite::Connection;
use std::sync::Mutex;

/// State shared across all handlers: one SQLite connection behind a lock.
///
/// Every operation is a single synchronous storage exchange, so the lock
/// is held only for the duration of one repository call and never across
/// an await point.
pub struct AppState {
    db: Mutex<Connection>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Mutex::new(conn),
        }
    }

    /// Runs one access-layer operation against the connection.
    pub fn with_db<T>(&self, op: impl FnOnce(&Connection) -> RepoResult<T>) -> Result<T, ApiError> {
        // A poisoned lock only means another handler panicked mid-request;
        // the connection itself is still usable.
        let conn = self.db.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        op(&conn).map_err(ApiError::from)
    }
}
