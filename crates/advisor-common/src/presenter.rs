use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::ProductRecord;
use crate::scorer::{self, Decision};

/// A matched record with its unrounded score. Lives for a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecommendation<'a> {
    pub record: &'a ProductRecord,
    pub score: f64,
    pub decision: Decision,
}

impl<'a> ScoredRecommendation<'a> {
    pub fn new(record: &'a ProductRecord) -> Self {
        let score = scorer::score(record);
        Self {
            record,
            score,
            decision: Decision::from_score(score),
        }
    }
}

/// Display form of a recommendation, shared by the HTML page, the JSON API and
/// the MCP tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub name: String,
    pub company: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: u64,
    pub manufactured: String,
    /// Rounded to one decimal place.
    pub score: f64,
    pub decision: Decision,
}

impl From<&ScoredRecommendation<'_>> for Recommendation {
    fn from(scored: &ScoredRecommendation<'_>) -> Self {
        let record = scored.record;
        Self {
            name: record.product_name.clone(),
            company: record.company.clone(),
            price: record.price,
            rating: record.rating,
            reviews: record.reviews,
            manufactured: record.manufactured_in.clone(),
            score: scorer::round_for_display(scored.score),
            decision: scored.decision,
        }
    }
}
