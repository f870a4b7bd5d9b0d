//! Quote Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Pending,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteType {
    HotelFlight,
    HotelFlightTour,
}

/// Price quote prepared by an advisor for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub advisor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_name: Option<String>,
    pub status: QuoteStatus,
    #[serde(rename = "type")]
    pub quote_type: QuoteType,
    pub total_price: f64,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

/// Create quote payload — status always starts as `pending`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCreate {
    pub client_id: String,
    pub client_name: String,
    pub advisor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_name: Option<String>,
    #[serde(rename = "type")]
    pub quote_type: QuoteType,
    pub total_price: f64,
    #[serde(default)]
    pub comments: String,
}
