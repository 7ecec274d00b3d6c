use std::sync::Arc;

use lantern_db::Store;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
    pub jwt_secret: String,
}
