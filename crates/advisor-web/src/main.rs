use tokio::net::TcpListener;
use tracing::info;

use advisor_common::catalog::Catalog;
use advisor_common::recommender::Recommender;
use advisor_web::app::build_app;
use advisor_web::config::Config;
use advisor_web::error::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    advisor_common::logging::init();

    info!("starting advisor-web");

    let config = Config::from_env()?;
    info!(
        dataset_path = %config.dataset_path.display(),
        bind_addr = %config.bind_addr,
        "configuration loaded"
    );

    // a dataset that fails to load leaves nothing to serve
    let catalog = Catalog::load(config.dataset_path()).map_err(AppError::from)?;
    let recommender = Recommender::new(catalog);

    let app = build_app(recommender);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "advisor-web ready");

    axum::serve(listener, app).await?;
    info!("advisor-web shut down");
    Ok(())
}
