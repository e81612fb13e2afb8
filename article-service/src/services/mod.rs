pub mod articles;
pub mod database;
pub mod error;
pub mod store;

pub use articles::{find_by_id, find_by_name, list_articles};
pub use database::MongoDb;
pub use error::ArticleError;
pub use store::{ArticleStore, InMemoryStore};
