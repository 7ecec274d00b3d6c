use serde::Serialize;
use thiserror::Error;

use crate::api::{AddCommentRequest, CreatePostRequest};

/// A field-level rule violation on a candidate post or comment.
/// Reportable, not fatal — the boundary turns it into a 400 with the
/// offending field and entity kind in the body.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field: String,
    pub model: String,
}

impl ValidationError {
    pub fn new(message: &str, field: &str, model: &str) -> Self {
        Self {
            message: message.to_string(),
            field: field.to_string(),
            model: model.to_string(),
        }
    }
}

pub trait Validate {
    /// Check field rules, returning the first violation.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new("title cannot be empty", "title", "post"));
        }
        if self.content.trim().is_empty() {
            return Err(ValidationError::new("content cannot be empty", "content", "post"));
        }
        Ok(())
    }
}

impl Validate for AddCommentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::new("content cannot be empty", "content", "comment"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn valid_post_passes() {
        assert!(post("A", "B").validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = post("", "body").validate().unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.model, "post");
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let err = post("   \t", "body").validate().unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn empty_content_is_rejected() {
        let err = post("title", " ").validate().unwrap_err();
        assert_eq!(err.field, "content");
        assert_eq!(err.model, "post");
    }

    #[test]
    fn first_failure_wins() {
        // Both fields empty: title is checked first.
        let err = post("", "").validate().unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn empty_comment_content_is_rejected() {
        let err = AddCommentRequest { content: "\n".to_string() }
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "content");
        assert_eq!(err.model, "comment");
    }
}
