//! JSON envelopes returned by the API.
//!
//! Every body carries a `status` of `"ok"` or `"error"`; successful list responses add
//! `data`, everything else adds a human readable `message`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::item;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Plain `{"status": "ok"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: Status,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemListResponse {
    pub status: Status,
    pub data: Vec<item::Model>,
}

impl ItemListResponse {
    pub fn ok(data: Vec<item::Model>) -> Self {
        Self {
            status: Status::Ok,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub status: Status,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"status": "error", "message": "Database connection failed"}))]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}
