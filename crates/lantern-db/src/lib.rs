pub mod error;
pub mod models;
pub mod queries;
pub mod votes;

pub use error::StoreError;

use bson::doc;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use crate::models::{PostDocument, UserDocument};

const POSTS: &str = "posts";
const USERS: &str = "users";

/// Handle to the blog's document store: a `posts` collection with comments
/// embedded, and a `users` collection that is only ever read here.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        let store = Self {
            db: client.database(db_name),
        };
        store.ensure_indexes().await?;

        info!("Connected to document store '{}'", db_name);
        Ok(store)
    }

    /// Wrap an already-open database handle (used by the test suite).
    pub fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// The listing query sorts on createdOn descending; keep it indexed.
    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let by_created = IndexModel::builder()
            .keys(doc! { "createdOn": -1 })
            .build();
        self.posts().create_index(by_created).await?;
        Ok(())
    }

    pub(crate) fn posts(&self) -> Collection<PostDocument> {
        self.db.collection(POSTS)
    }

    pub(crate) fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USERS)
    }
}
