use crate::models::Article;
use crate::services::{ArticleError, ArticleStore};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use service_core::error::AppError;

/// Shared handle to one MongoDB database. Clones share the driver's pool.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds the client from `uri`. The driver connects lazily, so this
    /// only fails on an unusable URI or unresolvable seed list.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Closes the client's connections once in-flight operations finish.
    pub async fn shutdown(self) {
        tracing::info!("Disconnecting from MongoDB");
        self.client.shutdown().await;
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ArticleStore for MongoDb {
    async fn list_articles(&self, collection: &str) -> Result<Vec<Article>, ArticleError> {
        let options = FindOptions::builder()
            .projection(doc! { "_id": 1, "name": 1 })
            .build();

        let cursor = self
            .db
            .collection::<Article>(collection)
            .find(doc! {}, options)
            .await?;

        let articles: Vec<Article> = cursor.try_collect().await?;
        Ok(articles)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, ArticleError> {
        Ok(self
            .db
            .collection::<Document>(collection)
            .find_one(filter, None)
            .await?)
    }
}
