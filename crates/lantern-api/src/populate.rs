//! Read-time author denormalization. Each response post carries `author`
//! objects next to the raw ids; nothing here is ever written back.

use std::collections::HashMap;

use bson::oid::ObjectId;
use tracing::warn;

use lantern_db::Store;
use lantern_db::models::{CommentDocument, PostDocument};
use lantern_types::api::{AuthorResponse, CommentResponse, PostResponse};

/// Attach author identities to a post and its comments. One lookup per
/// distinct author id. A missing or unreadable user record degrades to a
/// placeholder author — population never fails the post it is enriching.
pub async fn populate_post(store: &Store, post: PostDocument) -> PostResponse {
    let mut authors: HashMap<ObjectId, AuthorResponse> = HashMap::new();
    for id in author_ids(&post) {
        if !authors.contains_key(&id) {
            let author = fetch_author(store, id).await;
            authors.insert(id, author);
        }
    }
    assemble(post, &authors)
}

fn author_ids(post: &PostDocument) -> Vec<ObjectId> {
    std::iter::once(post.author_id)
        .chain(post.comments.iter().map(|c| c.author_id))
        .collect()
}

async fn fetch_author(store: &Store, id: ObjectId) -> AuthorResponse {
    match store.find_user(id).await {
        Ok(Some(user)) => AuthorResponse {
            id: user.id.to_hex(),
            username: user.username,
        },
        Ok(None) => {
            warn!("author {} not found during population", id);
            AuthorResponse::default()
        }
        Err(err) => {
            warn!("author {} lookup failed: {}", id, err);
            AuthorResponse::default()
        }
    }
}

fn assemble(post: PostDocument, authors: &HashMap<ObjectId, AuthorResponse>) -> PostResponse {
    let author = authors.get(&post.author_id).cloned().unwrap_or_default();
    let comments = post
        .comments
        .into_iter()
        .map(|c| assemble_comment(c, authors))
        .collect();

    PostResponse {
        id: post.id.to_hex(),
        title: post.title,
        content: post.content,
        author_id: post.author_id.to_hex(),
        author,
        created_on: post.created_on,
        comments,
        upvoters: hex_ids(&post.upvoters),
        downvoters: hex_ids(&post.downvoters),
    }
}

fn assemble_comment(
    comment: CommentDocument,
    authors: &HashMap<ObjectId, AuthorResponse>,
) -> CommentResponse {
    let author = authors.get(&comment.author_id).cloned().unwrap_or_default();
    CommentResponse {
        id: comment.id.to_hex(),
        content: comment.content,
        author_id: comment.author_id.to_hex(),
        author,
        created_on: comment.created_on,
        upvoters: hex_ids(&comment.upvoters),
        downvoters: hex_ids(&comment.downvoters),
    }
}

pub(crate) fn hex_ids(ids: &[ObjectId]) -> Vec<String> {
    ids.iter().map(|id| id.to_hex()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(author: ObjectId, comment_author: ObjectId) -> PostDocument {
        let mut post = PostDocument::new("title".into(), "content".into(), author);
        post.comments
            .push(CommentDocument::new("hi".into(), comment_author));
        post
    }

    #[test]
    fn assemble_attaches_known_authors() {
        let author = ObjectId::new();
        let commenter = ObjectId::new();
        let mut authors = HashMap::new();
        authors.insert(
            author,
            AuthorResponse { id: author.to_hex(), username: "ada".into() },
        );
        authors.insert(
            commenter,
            AuthorResponse { id: commenter.to_hex(), username: "bob".into() },
        );

        let response = assemble(sample_post(author, commenter), &authors);
        assert_eq!(response.author.username, "ada");
        assert_eq!(response.author_id, author.to_hex());
        assert_eq!(response.comments[0].author.username, "bob");
    }

    #[test]
    fn missing_author_degrades_to_placeholder() {
        let author = ObjectId::new();
        let commenter = ObjectId::new();
        // Only the post author resolves; the commenter's record is gone.
        let mut authors = HashMap::new();
        authors.insert(
            author,
            AuthorResponse { id: author.to_hex(), username: "ada".into() },
        );

        let response = assemble(sample_post(author, commenter), &authors);
        assert_eq!(response.comments[0].author, AuthorResponse::default());
        // The raw id is still reported alongside the placeholder.
        assert_eq!(response.comments[0].author_id, commenter.to_hex());
    }

    #[test]
    fn author_ids_covers_post_and_comments() {
        let author = ObjectId::new();
        let commenter = ObjectId::new();
        let ids = author_ids(&sample_post(author, commenter));
        assert_eq!(ids, vec![author, commenter]);
    }
}
