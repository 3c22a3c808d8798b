/// Query pipeline: match, score, present.
///
/// `Recommender` owns the catalog behind an `Arc`. It is cheap to clone and every
/// surface (HTTP, MCP) holds its own handle; the catalog is never mutated after load.
use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::RecommendError;
use crate::matcher;
use crate::presenter::{Recommendation, ScoredRecommendation};

#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend(&self, input: &str) -> Result<Vec<Recommendation>, RecommendError> {
        let matches = matcher::find_matches(input, &self.catalog)
            .inspect_err(|e| info!(query = input, error = %e, "query rejected"))?;

        let recommendations: Vec<Recommendation> = matches
            .into_iter()
            .map(|record| Recommendation::from(&ScoredRecommendation::new(record)))
            .collect();

        debug!(query = input, matches = recommendations.len(), "query answered");
        Ok(recommendations)
    }
}
