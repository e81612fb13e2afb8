use crate::models::Article;
use crate::services::{self, ArticleError};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

pub const HELP_TEXT: &str = "Please search for an article with format /:collection/:name";

const COLLECTION_FAILURE: &str = "Failed to fetch collection\n";
const ARTICLE_FAILURE: &str = "Failed to fetch article\n";

/// Client-visible failure. Every query error becomes a plain-text 400; the
/// typed cause only reaches the log.
#[derive(Debug)]
pub struct FetchFailure(&'static str);

impl FetchFailure {
    fn logged(message: &'static str, collection: &str, err: ArticleError) -> Self {
        tracing::error!(
            collection = %collection,
            kind = err.kind(),
            error = %err,
            "{}",
            message.trim_end()
        );
        FetchFailure(message)
    }
}

impl IntoResponse for FetchFailure {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0).into_response()
    }
}

pub async fn help() -> &'static str {
    HELP_TEXT
}

pub async fn list_collection(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<Article>>, FetchFailure> {
    services::list_articles(state.store.as_ref(), &collection)
        .await
        .map(Json)
        .map_err(|e| FetchFailure::logged(COLLECTION_FAILURE, &collection, e))
}

pub async fn get_by_name(
    State(state): State<AppState>,
    Path((collection, name)): Path<(String, String)>,
) -> Result<Response, FetchFailure> {
    services::find_by_name(state.store.as_ref(), &collection, &name)
        .await
        .map(json_body)
        .map_err(|e| FetchFailure::logged(ARTICLE_FAILURE, &collection, e))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Response, FetchFailure> {
    services::find_by_id(state.store.as_ref(), &collection, &id)
        .await
        .map(json_body)
        .map_err(|e| FetchFailure::logged(ARTICLE_FAILURE, &collection, e))
}

fn json_body(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
