//! Advisor Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Travel advisor
///
/// `video_calls` and `quotes` are denormalized activity counters, bumped by
/// the directory when a call is assigned or a quote is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub video_calls: u32,
    pub quotes: u32,
}

/// Create advisor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorCreate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
