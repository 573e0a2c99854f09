//! Post HTTP routes.
//!
//! List/detail responses carry the owning author's name/email, which the
//! access layer eager-loads in the same query.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use quill_core::{
    AuthorId, NewPost, Post, PostId, PostListQuery, PostPatch, PostService, PostWithAuthor,
    SqlitePostRepository,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::MessageBody;

/// Builds the `/posts` route tree.
pub fn post_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .with_state(state)
}

/// Creation payload; `author_id` of 0 (or absent) never matches a stored
/// author and therefore fails the referential validation check.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<AuthorId>,
}

/// Partial update payload. `author_id` is deliberately not accepted;
/// ownership is immutable after creation.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(default)]
    pub author_id: Option<AuthorId>,
}

async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let draft = NewPost::new(
        body.title.unwrap_or_default(),
        body.content.unwrap_or_default(),
        body.author_id.unwrap_or_default(),
    );
    let post =
        state.with_db(|conn| PostService::new(SqlitePostRepository::new(conn)).create(draft))?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostListParams>,
) -> Result<Json<Vec<PostWithAuthor>>, ApiError> {
    let query = PostListQuery {
        author_id: params.author_id,
    };
    let posts =
        state.with_db(|conn| PostService::new(SqlitePostRepository::new(conn)).list(query))?;
    Ok(Json(posts))
}

async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<PostId>,
) -> Result<Json<PostWithAuthor>, ApiError> {
    let post = state.with_db(|conn| PostService::new(SqlitePostRepository::new(conn)).get(id))?;
    Ok(Json(post))
}

async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<PostId>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let patch = PostPatch {
        title: body.title,
        content: body.content,
    };
    let post = state
        .with_db(|conn| PostService::new(SqlitePostRepository::new(conn)).update(id, patch))?;
    Ok(Json(post))
}

async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<PostId>,
) -> Result<Json<MessageBody>, ApiError> {
    state.with_db(|conn| PostService::new(SqlitePostRepository::new(conn)).delete(id))?;
    Ok(Json(MessageBody {
        message: "Post deleted".to_string(),
    }))
}
