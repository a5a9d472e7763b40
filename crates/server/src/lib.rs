//! A small JSON API for storing and listing items.
//!
//! Items live in a single PostgreSQL table. The service exposes `GET /items`,
//! `POST /items`, a `GET /health` database probe and an HTML listing at `/`.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::Gateway;

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod response;

/// Shared handles every request handler reaches through an `Extension`.
#[derive(Clone, Debug)]
pub struct AppResources {
    pub gateway: Arc<Gateway>,
    pub config: Arc<AppConfig>,
}
