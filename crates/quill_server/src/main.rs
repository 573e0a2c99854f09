//! Server entry point.
//!
//! Startup order matters: logging first, then the storage client, then
//! the router. The connection is constructed here and passed down; no
//! module-level storage handle exists anywhere.

use std::sync::Arc;

use quill_core::{init_logging, open_db};
use quill_server::{server, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();

    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let conn = open_db(&config.database_path)?;
    let state = Arc::new(AppState::new(conn));

    server::serve(&config, state).await?;
    Ok(())
}
