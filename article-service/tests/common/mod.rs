#![allow(dead_code)]

use article_service::config::{ArticleConfig, CorsConfig, MongoConfig};
use article_service::services::{InMemoryStore, MongoDb};
use article_service::startup::{build_router, AppState, Application};
use axum::Router;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const TEST_ORIGIN: &str = "http://localhost:5173";
pub const BUNION_ID: &str = "507f191e810c19729de860ea";

pub fn test_config(mongo_uri: &str, database: &str) -> ArticleConfig {
    ArticleConfig {
        common: CoreConfig { port: 0 },
        log_level: "error".to_string(),
        mongodb: MongoConfig {
            uri: mongo_uri.to_string(),
            database: database.to_string(),
        },
        cors: CorsConfig {
            allowed_origin: TEST_ORIGIN.to_string(),
        },
    }
}

/// Router over an in-process store, so tests can seed data and count queries.
pub fn router_with(store: Arc<InMemoryStore>) -> Router {
    let state = AppState {
        config: test_config("mongodb://unused", "articles"),
        store,
    };
    build_router(state).expect("Failed to build router")
}

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    /// Spawns the full service against the MongoDB at `MONGO_URI`, using a
    /// throwaway database.
    pub async fn spawn() -> Self {
        let uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db_name = format!("articles_test_{}", unique_suffix());

        let app = Application::build(test_config(&uri, &db_name))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(&address).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

fn unique_suffix() -> String {
    mongodb::bson::oid::ObjectId::new().to_hex()
}
