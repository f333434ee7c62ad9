use std::sync::Arc;

use exam_notices::config::settings::Settings;
use exam_notices::core::portal::Portal;
use exam_notices::web::routes::{AppState, routes};
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::new()?;
    let portal = Portal::new(&settings.portal).map_err(|err| anyhow::anyhow!(err.to_string()))?;
    info!("serving notifications from {}", portal.url());

    let app = routes(AppState {
        portal: Arc::new(portal),
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
