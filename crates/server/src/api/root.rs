//! HTML landing page listing the stored items.

use askama::Template;
use axum::{
    Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::AppResources;
use crate::api::health::MISC_TAG;
use crate::entity::item;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub items: Vec<item::Model>,
}

/// Landing page. Shows an empty list if the database is unavailable.
#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/",
    tag = MISC_TAG,
    operation_id = "Index",
    responses(
        (status = 200, description = "HTML listing of all items", body = String, content_type = "text/html")
    )
)]
pub async fn index(Extension(resources): Extension<AppResources>) -> Response {
    let items = match resources.gateway.list_items().await {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load items for index page");
            Vec::new()
        }
    };

    match (IndexTemplate { items }).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to render index page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
