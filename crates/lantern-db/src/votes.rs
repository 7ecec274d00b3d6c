//! Vote ledger. A vote is one atomic update: `$addToSet` into the array for
//! the cast direction plus `$pull` from the opposite array. The store never
//! reads, mutates, and rewrites the document — concurrent voters on the same
//! entity each apply their own set delta and cannot clobber one another.
//! `$addToSet` makes repeat votes in the same direction a no-op.

use bson::oid::ObjectId;
use bson::{Document, doc};
use mongodb::options::ReturnDocument;

use lantern_types::models::VoteDirection;

use crate::Store;
use crate::error::StoreError;
use crate::models::PostDocument;

/// Voter sets of a single votable entity after an update.
#[derive(Debug, Clone)]
pub struct VoteSets {
    pub upvoters: Vec<ObjectId>,
    pub downvoters: Vec<ObjectId>,
}

/// Array field names as (add-to, pull-from) for a cast direction.
fn target_arrays(direction: VoteDirection) -> (&'static str, &'static str) {
    match direction {
        VoteDirection::Up => ("upvoters", "downvoters"),
        VoteDirection::Down => ("downvoters", "upvoters"),
    }
}

/// Build the atomic set-delta update. `prefix` addresses the entity owning
/// the voter arrays: empty for the post itself, `"comments.$."` for the
/// embedded comment matched by the filter's positional operator.
fn vote_update(prefix: &str, direction: VoteDirection, user_id: ObjectId) -> Document {
    let (add_to, pull_from) = target_arrays(direction);
    let mut add = Document::new();
    add.insert(format!("{prefix}{add_to}"), user_id);
    let mut pull = Document::new();
    pull.insert(format!("{prefix}{pull_from}"), user_id);
    doc! { "$addToSet": add, "$pull": pull }
}

impl Store {
    pub async fn cast_post_vote(
        &self,
        post_id: ObjectId,
        user_id: ObjectId,
        direction: VoteDirection,
    ) -> Result<VoteSets, StoreError> {
        let post = self
            .posts()
            .find_one_and_update(doc! { "_id": post_id }, vote_update("", direction, user_id))
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok(VoteSets {
            upvoters: post.upvoters,
            downvoters: post.downvoters,
        })
    }

    pub async fn cast_comment_vote(
        &self,
        post_id: ObjectId,
        comment_id: ObjectId,
        user_id: ObjectId,
        direction: VoteDirection,
    ) -> Result<VoteSets, StoreError> {
        let filter = doc! { "_id": post_id, "comments._id": comment_id };
        let post: PostDocument = self
            .posts()
            .find_one_and_update(filter, vote_update("comments.$.", direction, user_id))
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)?;

        let comment = post
            .comments
            .into_iter()
            .find(|c| c.id == comment_id)
            .ok_or(StoreError::NotFound)?;

        Ok(VoteSets {
            upvoters: comment.upvoters,
            downvoters: comment.downvoters,
        })
    }
}
