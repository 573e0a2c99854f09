//! Author HTTP routes.
//!
//! Each route maps 1:1 onto one access-layer operation; request bodies
//! are deserialized here and nothing beyond DTO translation happens in
//! handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use quill_core::{
    Author, AuthorId, AuthorPatch, AuthorService, NewAuthor, Post, PostService,
    SqliteAuthorRepository, SqlitePostRepository,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::MessageBody;

/// Builds the `/authors` route tree.
pub fn author_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/authors/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
        .route("/authors/:id/posts", get(list_author_posts))
        .with_state(state)
}

/// Creation payload. Fields are optional at the serde level so missing
/// input surfaces as a domain validation error (400), not a decode error.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let draft = NewAuthor::new(
        body.name.unwrap_or_default(),
        body.email.unwrap_or_default(),
    );
    let author = state.with_db(|conn| {
        AuthorService::new(SqliteAuthorRepository::new(conn)).create(draft)
    })?;
    Ok((StatusCode::CREATED, Json(author)))
}

async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Author>>, ApiError> {
    let authors =
        state.with_db(|conn| AuthorService::new(SqliteAuthorRepository::new(conn)).list())?;
    Ok(Json(authors))
}

async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AuthorId>,
) -> Result<Json<Author>, ApiError> {
    let author =
        state.with_db(|conn| AuthorService::new(SqliteAuthorRepository::new(conn)).get(id))?;
    Ok(Json(author))
}

async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AuthorId>,
    Json(body): Json<UpdateAuthorRequest>,
) -> Result<Json<Author>, ApiError> {
    let patch = AuthorPatch {
        name: body.name,
        email: body.email,
    };
    let author = state.with_db(|conn| {
        AuthorService::new(SqliteAuthorRepository::new(conn)).update(id, patch)
    })?;
    Ok(Json(author))
}

async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AuthorId>,
) -> Result<Json<MessageBody>, ApiError> {
    state.with_db(|conn| AuthorService::new(SqliteAuthorRepository::new(conn)).delete(id))?;
    Ok(Json(MessageBody {
        message: "Author and associated posts deleted".to_string(),
    }))
}

async fn list_author_posts(
    State(state): State<Arc<AppState>>,
    Path(id): Path<AuthorId>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.with_db(|conn| {
        PostService::new(SqlitePostRepository::new(conn)).list_by_author(id)
    })?;
    Ok(Json(posts))
}
