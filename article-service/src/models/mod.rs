pub mod article;

pub use article::{document_to_json, Article};
