use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use advisor_common::api::{ErrorResponse, RecommendParams, RecommendResponse};
use advisor_common::error::RecommendError;
use advisor_common::recommender::Recommender;

use crate::page::{self, PageView};

/// Same router in production and in the black-box tests.
pub fn build_app(recommender: Recommender) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/recommend", post(recommend))
        .route("/health", get(health))
        .with_state(recommender)
}

#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub product: String,
}

pub async fn show_form() -> Html<String> {
    Html(page::render(&PageView::default()))
}

/// Form errors are part of the page, so this always answers 200.
pub async fn submit_form(
    State(recommender): State<Recommender>,
    Form(form): Form<ProductForm>,
) -> Html<String> {
    let view = match recommender.recommend(&form.product) {
        Ok(results) => PageView::with_results(form.product, results),
        Err(e) => PageView::with_error(form.product, e.to_string()),
    };
    Html(page::render(&view))
}

pub async fn recommend(
    State(recommender): State<Recommender>,
    Json(params): Json<RecommendParams>,
) -> Response {
    match recommender.recommend(&params.query) {
        Ok(results) => Json(RecommendResponse {
            query: params.query,
            results,
        })
        .into_response(),
        Err(e) => recommend_error_to_response(&e),
    }
}

pub async fn health(State(recommender): State<Recommender>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "products": recommender.catalog().len(),
    }))
}

pub fn recommend_error_to_response(err: &RecommendError) -> Response {
    let status = match err {
        RecommendError::MalformedQuery => StatusCode::BAD_REQUEST,
        RecommendError::NoMatch { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(ErrorResponse::from(err))).into_response()
}
