mod config;
mod error;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;

use advisor_common::catalog::Catalog;
use advisor_common::recommender::Recommender;

use config::Config;
use error::AppError;
use server::AdvisorServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    advisor_common::logging::init();

    info!("starting advisor-mcp MCP server");

    let config = Config::from_env()?;
    info!(
        dataset_path = %config.dataset_path.display(),
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let catalog = Catalog::load(config.dataset_path()).map_err(AppError::from)?;
    let server = AdvisorServer::new(Recommender::new(catalog));

    if let Some(addr) = config.tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
