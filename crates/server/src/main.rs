use item_service::AppResources;
use item_service::api::start_webserver;
use item_service::config::load_config;
use item_service::db::Gateway;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_standard_tracing() {
    let default_directives = "item_service=info,tower_http=info,sea_orm=info";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env is fine; the environment may already be populated.
    let dotenv = dotenvy::dotenv();

    initialize_standard_tracing();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let config = Arc::new(load_config()?);
    let settings = config.connection_settings()?;
    tracing::info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        user = settings.user.as_deref().unwrap_or(""),
        "database target"
    );

    let gateway = Gateway::connect(&settings.connection_url(), &config.pool).await?;
    gateway.initialize().await?;

    let resources = AppResources {
        gateway: Arc::new(gateway),
        config,
    };

    start_webserver(resources).await?;
    Ok(())
}
