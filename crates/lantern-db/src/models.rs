//! Document types as persisted in MongoDB. Distinct from the lantern-types
//! API models to keep the storage layer independent of wire shapes.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    pub author_id: ObjectId,
    /// Set once at insert; immutable afterwards.
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_on: DateTime<Utc>,
    pub comments: Vec<CommentDocument>,
    pub upvoters: Vec<ObjectId>,
    pub downvoters: Vec<ObjectId>,
}

impl PostDocument {
    pub fn new(title: String, content: String, author_id: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            title,
            content,
            author_id,
            created_on: Utc::now(),
            comments: Vec::new(),
            upvoters: Vec::new(),
            downvoters: Vec::new(),
        }
    }
}

/// A comment lives embedded in its parent post and is deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub content: String,
    pub author_id: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_on: DateTime<Utc>,
    pub upvoters: Vec<ObjectId>,
    pub downvoters: Vec<ObjectId>,
}

impl CommentDocument {
    pub fn new(content: String, author_id: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            content,
            author_id,
            created_on: Utc::now(),
            upvoters: Vec::new(),
            downvoters: Vec::new(),
        }
    }
}

/// Users are owned by the auth service; this store only looks them up
/// by id for author population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_with_empty_sets() {
        let p = PostDocument::new("t".into(), "c".into(), ObjectId::new());
        assert!(p.comments.is_empty());
        assert!(p.upvoters.is_empty());
        assert!(p.downvoters.is_empty());
    }

    #[test]
    fn post_document_uses_original_field_names() {
        let p = PostDocument::new("t".into(), "c".into(), ObjectId::new());
        let doc = bson::to_document(&p).unwrap();
        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("authorId"));
        assert!(doc.contains_key("createdOn"));
        // createdOn must persist as a real BSON datetime, not a string.
        assert!(matches!(doc.get("createdOn"), Some(bson::Bson::DateTime(_))));
    }
}
