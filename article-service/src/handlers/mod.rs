pub mod articles;

pub use articles::{get_by_id, get_by_name, help, list_collection, FetchFailure, HELP_TEXT};
