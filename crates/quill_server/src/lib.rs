//! HTTP transport for the Quill blog backend.
//!
//! A thin axum layer over `quill_core`: every route maps 1:1 onto one
//! access-layer operation, and all invariants live in the core crate.

use serde::Serialize;

pub mod author_routes;
pub mod config;
pub mod error;
pub mod post_routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use server::build_router;
pub use state::AppState;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}
