//! Query functions behind the three read routes.
//!
//! Each opens the named collection through an [`ArticleStore`] and issues a
//! single query. Lookups render the whole matched document as tab-indented
//! JSON.

use crate::models::{document_to_json, Article};
use crate::services::{ArticleError, ArticleStore};
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Identifier and name of every document in `collection`, in storage order.
pub async fn list_articles(
    store: &dyn ArticleStore,
    collection: &str,
) -> Result<Vec<Article>, ArticleError> {
    store.list_articles(collection).await
}

/// The first document whose `name` equals `name` exactly.
pub async fn find_by_name(
    store: &dyn ArticleStore,
    collection: &str,
    name: &str,
) -> Result<String, ArticleError> {
    let document = store
        .find_one(collection, doc! { "name": name })
        .await?
        .ok_or_else(|| {
            tracing::info!(collection = %collection, "No document was found with the name {}", name);
            ArticleError::not_found(collection, format!("name '{}'", name))
        })?;

    render_document(document)
}

/// The document whose `_id` is the object id spelled by `id`.
///
/// A malformed `id` is rejected before the store is consulted.
pub async fn find_by_id(
    store: &dyn ArticleStore,
    collection: &str,
    id: &str,
) -> Result<String, ArticleError> {
    let object_id = ObjectId::parse_str(id)?;

    let document = store
        .find_one(collection, doc! { "_id": object_id })
        .await?
        .ok_or_else(|| {
            tracing::info!(collection = %collection, "No document was found with the id {}", object_id);
            ArticleError::not_found(collection, format!("id '{}'", object_id))
        })?;

    render_document(document)
}

fn render_document(document: Document) -> Result<String, ArticleError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    document_to_json(document).serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
