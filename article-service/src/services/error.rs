use mongodb::bson::{self, oid};
use thiserror::Error;

/// Per-request failures of the query functions.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("invalid object id: {0}")]
    InvalidIdentifier(#[from] oid::Error),

    #[error("no document in collection '{collection}' with {key}")]
    NotFound { collection: String, key: String },

    #[error("query failed: {0}")]
    Query(#[from] mongodb::error::Error),

    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("failed to encode document as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("rendered JSON is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ArticleError {
    pub fn not_found(collection: &str, key: impl Into<String>) -> Self {
        ArticleError::NotFound {
            collection: collection.to_string(),
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ArticleError::NotFound { .. })
    }

    /// Short label used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            ArticleError::InvalidIdentifier(_) => "invalid_identifier",
            ArticleError::NotFound { .. } => "not_found",
            ArticleError::Query(_)
            | ArticleError::Decode(_)
            | ArticleError::Encode(_)
            | ArticleError::Utf8(_) => "query",
        }
    }
}
