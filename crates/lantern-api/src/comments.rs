use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use lantern_db::models::CommentDocument;
use lantern_types::api::AddCommentRequest;
use lantern_types::validate::Validate;

use crate::error::{ApiError, parse_object_id};
use crate::middleware::CurrentUser;
use crate::populate::populate_post;
use crate::state::AppState;

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<AddCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let post_id = parse_object_id(&id)?;
    req.validate()?;

    let comment = CommentDocument::new(req.content, user.id);
    let post = state.store.push_comment(post_id, &comment).await?;

    Ok((StatusCode::CREATED, Json(populate_post(&state.store, post).await)))
}
