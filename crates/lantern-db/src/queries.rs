use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;

use crate::Store;
use crate::error::StoreError;
use crate::models::{CommentDocument, PostDocument, UserDocument};

impl Store {
    // -- Posts --

    pub async fn insert_post(&self, post: &PostDocument) -> Result<(), StoreError> {
        self.posts().insert_one(post).await?;
        Ok(())
    }

    pub async fn find_post(&self, post_id: ObjectId) -> Result<PostDocument, StoreError> {
        self.posts()
            .find_one(doc! { "_id": post_id })
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Posts strictly older than `before`, newest first.
    pub async fn list_posts_before(
        &self,
        before: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<PostDocument>, StoreError> {
        let cursor = self
            .posts()
            .find(doc! { "createdOn": { "$lt": before } })
            .sort(doc! { "createdOn": -1 })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    // -- Comments --

    /// Append a comment to its parent post in a single atomic `$push`,
    /// returning the updated post.
    pub async fn push_comment(
        &self,
        post_id: ObjectId,
        comment: &CommentDocument,
    ) -> Result<PostDocument, StoreError> {
        let update = doc! { "$push": { "comments": bson::to_bson(comment)? } };

        self.posts()
            .find_one_and_update(doc! { "_id": post_id }, update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)
    }

    // -- Users --

    pub async fn find_user(&self, user_id: ObjectId) -> Result<Option<UserDocument>, StoreError> {
        Ok(self.users().find_one(doc! { "_id": user_id }).await?)
    }
}
