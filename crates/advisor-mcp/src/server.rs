/// MCP server exposing the buy advisor to agent clients.
///
/// Exposes two tools:
/// - `recommend_product`: score every product matching "<product> by <company>"
/// - `dataset_summary`: catalog size and the companies it covers
use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};

use advisor_common::api::{DatasetSummaryResponse, RecommendParams, RecommendResponse};
use advisor_common::recommender::Recommender;

#[derive(Clone)]
pub struct AdvisorServer {
    recommender: Recommender,
    tool_router: ToolRouter<AdvisorServer>,
}

impl AdvisorServer {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl AdvisorServer {
    #[tool(description = "Score electronics products matching a query of the form '<product> by <company>' (e.g. 'phone by samsung'). Returns every match with a 0-100 score and a BUY / NOT BUY decision.")]
    async fn recommend_product(
        &self,
        Parameters(params): Parameters<RecommendParams>,
    ) -> Result<Json<RecommendResponse>, String> {
        let results = self
            .recommender
            .recommend(&params.query)
            .map_err(|e| e.to_string())?;
        Ok(Json(RecommendResponse {
            query: params.query,
            results,
        }))
    }

    #[tool(description = "Summarize the loaded product dataset: number of products and the companies available to query.")]
    async fn dataset_summary(&self) -> Result<Json<DatasetSummaryResponse>, String> {
        let catalog = self.recommender.catalog();
        Ok(Json(DatasetSummaryResponse {
            products: catalog.len(),
            companies: catalog.companies(),
        }))
    }
}

#[tool_handler]
impl ServerHandler for AdvisorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "advisor-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Electronics buy advisor. Call recommend_product with a query like \
'laptop by dell' to get every matching product with its score and BUY / NOT BUY decision. \
Use dataset_summary to discover which companies are available."
                    .to_string(),
            ),
        }
    }
}
