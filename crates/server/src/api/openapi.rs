//! OpenAPI/Utoipa configuration.

use crate::api::{health::MISC_TAG, items::ITEMS_TAG};
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Service API",
        version = "1.0.0",
        description = "Store and list items."
    ),
    tags(
        (name = MISC_TAG, description = "Health and landing page"),
        (name = ITEMS_TAG, description = "Item endpoints")
    )
)]
pub struct ApiDoc;
