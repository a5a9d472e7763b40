//! HTTP surface of the item service.
//!
//! - `root` - HTML listing of all items (/)
//! - `health` - Database connectivity check (/health)
//! - `items` - List and create items (/items)
//! - `openapi` - OpenAPI/Utoipa configuration, served as Redoc at /api-docs

pub mod health;
pub mod items;
pub mod openapi;
pub mod root;

pub use health::MISC_TAG;
pub use items::ITEMS_TAG;

use crate::AppResources;
use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Builds the application router with every route and middleware layer attached.
pub fn router(app_resources: AppResources) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .routes(routes!(root::index))
        .routes(routes!(health::health))
        .routes(routes!(items::list_items, items::create_item))
        // Descriptions are unbounded text, so request bodies are too
        .layer(DefaultBodyLimit::disable())
        .layer(axum::Extension(app_resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    router.merge(Redoc::with_url("/api-docs", api))
}

/// Starts the web server on the configured bind address.
#[tracing::instrument(skip(app_resources))]
pub async fn start_webserver(app_resources: AppResources) -> color_eyre::Result<()> {
    let addr = app_resources.config.bind_address.clone();
    let router = router(app_resources);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, router)
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
