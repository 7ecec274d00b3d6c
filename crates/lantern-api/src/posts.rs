use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use lantern_db::models::PostDocument;
use lantern_types::api::{CreatePostRequest, ListNewResponse};
use lantern_types::cursor;
use lantern_types::validate::Validate;

use crate::error::{ApiError, parse_object_id};
use crate::middleware::CurrentUser;
use crate::populate::populate_post;
use crate::state::AppState;

const PAGE_SIZE: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub after: Option<String>,
}

pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()?;

    let post = PostDocument::new(req.title, req.content, user.id);
    state.store.insert_post(&post).await?;

    Ok((StatusCode::CREATED, Json(populate_post(&state.store, post).await)))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_object_id(&id)?;
    let post = state.store.find_post(post_id).await?;

    Ok(Json(populate_post(&state.store, post).await))
}

pub async fn list_new(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // Without a cursor the window is bounded by request receipt, so a post
    // created mid-pagination cannot duplicate or skip entries.
    let before = match &query.after {
        Some(raw) => cursor::parse_after(raw)?,
        None => Utc::now(),
    };

    let page = state.store.list_posts_before(before, PAGE_SIZE).await?;
    let next_cursor = cursor::next_cursor(page.last().map(|p| p.created_on));

    let mut posts = Vec::with_capacity(page.len());
    for post in page {
        posts.push(populate_post(&state.store, post).await);
    }

    Ok(Json(ListNewResponse { posts, next_cursor }))
}
