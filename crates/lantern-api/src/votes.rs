use axum::{
    Extension, Json,
    extract::{Path, State},
};

use lantern_db::votes::VoteSets;
use lantern_types::api::VoteResponse;
use lantern_types::models::VoteDirection;

use crate::error::{ApiError, parse_object_id};
use crate::middleware::CurrentUser;
use crate::populate::hex_ids;
use crate::state::AppState;

pub async fn upvote_post(
    state: State<AppState>,
    path: Path<String>,
    user: Extension<CurrentUser>,
) -> Result<Json<VoteResponse>, ApiError> {
    vote_on_post(state, path, user, VoteDirection::Up).await
}

pub async fn downvote_post(
    state: State<AppState>,
    path: Path<String>,
    user: Extension<CurrentUser>,
) -> Result<Json<VoteResponse>, ApiError> {
    vote_on_post(state, path, user, VoteDirection::Down).await
}

pub async fn upvote_comment(
    state: State<AppState>,
    path: Path<(String, String)>,
    user: Extension<CurrentUser>,
) -> Result<Json<VoteResponse>, ApiError> {
    vote_on_comment(state, path, user, VoteDirection::Up).await
}

pub async fn downvote_comment(
    state: State<AppState>,
    path: Path<(String, String)>,
    user: Extension<CurrentUser>,
) -> Result<Json<VoteResponse>, ApiError> {
    vote_on_comment(state, path, user, VoteDirection::Down).await
}

async fn vote_on_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(user): Extension<CurrentUser>,
    direction: VoteDirection,
) -> Result<Json<VoteResponse>, ApiError> {
    let post_id = parse_object_id(&id)?;
    let sets = state.store.cast_post_vote(post_id, user.id, direction).await?;
    Ok(Json(vote_response(sets)))
}

async fn vote_on_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
    Extension(user): Extension<CurrentUser>,
    direction: VoteDirection,
) -> Result<Json<VoteResponse>, ApiError> {
    let post_id = parse_object_id(&id)?;
    let comment_id = parse_object_id(&comment_id)?;
    let sets = state
        .store
        .cast_comment_vote(post_id, comment_id, user.id, direction)
        .await?;
    Ok(Json(vote_response(sets)))
}

fn vote_response(sets: VoteSets) -> VoteResponse {
    VoteResponse {
        upvoters: hex_ids(&sets.upvoters),
        downvoters: hex_ids(&sets.downvoters),
    }
}
