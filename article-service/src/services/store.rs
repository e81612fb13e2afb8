use crate::models::Article;
use crate::services::ArticleError;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Document};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// Read access to named collections of schemaless documents.
///
/// A missing collection behaves like an empty one.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Every document in `collection`, projected to `_id` and `name`.
    async fn list_articles(&self, collection: &str) -> Result<Vec<Article>, ArticleError>;

    /// First document whose fields equal every field of `filter`.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ArticleError>;
}

/// Process-local store with the same matching rules as the database,
/// counting every query it answers.
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `document`, generating an `_id` when it has none.
    pub fn insert(&self, collection: &str, mut document: Document) -> ObjectId {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        self.collections
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(collection.to_string())
            .or_default()
            .push(document);
        id
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleStore for InMemoryStore {
    async fn list_articles(&self, collection: &str) -> Result<Vec<Article>, ArticleError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        documents
            .iter()
            .map(|document| {
                let mut projected = Document::new();
                for key in ["_id", "name"] {
                    if let Some(value) = document.get(key) {
                        projected.insert(key, value.clone());
                    }
                }
                bson::from_document::<Article>(projected).map_err(ArticleError::from)
            })
            .collect()
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ArticleError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let collections = self.collections.read().unwrap_or_else(|e| e.into_inner());
        Ok(collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| {
                    filter
                        .iter()
                        .all(|(key, value)| document.get(key) == Some(value))
                })
                .cloned()
        }))
    }
}
