use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RecommendError;
use crate::presenter::Recommendation;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendParams {
    /// Free-text query in the form "<product> by <company>", e.g. "phone by samsung".
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendResponse {
    /// The query exactly as submitted.
    pub query: String,
    /// Matching products in dataset order.
    pub results: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Machine-readable code: "malformed_query" or "no_match".
    pub error: String,
    /// Message suitable for showing to the user.
    pub message: String,
}

impl From<&RecommendError> for ErrorResponse {
    fn from(err: &RecommendError) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DatasetSummaryResponse {
    pub products: usize,
    pub companies: Vec<String>,
}
