use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Requests --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddCommentRequest {
    pub content: String,
}

// -- Responses --

/// Author identity attached to posts and comments at read time.
/// Defaults to an empty placeholder when the user record is gone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub author: AuthorResponse,
    pub created_on: DateTime<Utc>,
    pub upvoters: Vec<String>,
    pub downvoters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub author: AuthorResponse,
    pub created_on: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
    pub upvoters: Vec<String>,
    pub downvoters: Vec<String>,
}

/// Updated voter sets of the entity a vote landed on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    pub upvoters: Vec<String>,
    pub downvoters: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNewResponse {
    pub posts: Vec<PostResponse>,
    pub next_cursor: String,
}
