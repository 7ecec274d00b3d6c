pub mod api;
pub mod cursor;
pub mod models;
pub mod validate;
