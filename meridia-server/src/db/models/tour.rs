//! Tour record
//!
//! Storage-side shape of a tour: identical to the wire model except the id,
//! which is a native `RecordId` here and an opaque `tour:<key>` string on the
//! wire.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::{Airport, Month, Tour, TourDay};

/// Tour document as stored in the `tour` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub tour_name: String,
    pub year: i32,
    pub month: Month,
    pub arrival_date: u8,
    pub departure_date: u8,
    #[serde(default)]
    pub airport: Airport,
    #[serde(default)]
    pub days: Vec<TourDay>,
    #[serde(default)]
    pub compania: Vec<String>,
    #[serde(default)]
    pub destino: Vec<String>,
    #[serde(default)]
    pub especial: Vec<String>,
    #[serde(default)]
    pub plan: Vec<String>,
}

impl TourRecord {
    /// Build a record from a wire tour, dropping any id it carries — the
    /// store owns identity.
    pub fn from_tour(tour: Tour) -> Self {
        Self {
            id: None,
            tour_name: tour.tour_name,
            year: tour.year,
            month: tour.month,
            arrival_date: tour.arrival_date,
            departure_date: tour.departure_date,
            airport: tour.airport,
            days: tour.days,
            compania: tour.compania,
            destino: tour.destino,
            especial: tour.especial,
            plan: tour.plan,
        }
    }

    /// Convert to the wire model, rendering the record id as an opaque
    /// string.
    pub fn into_tour(self) -> Tour {
        Tour {
            id: self.id.map(|thing| thing.to_string()),
            tour_name: self.tour_name,
            year: self.year,
            month: self.month,
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
            airport: self.airport,
            days: self.days,
            compania: self.compania,
            destino: self.destino,
            especial: self.especial,
            plan: self.plan,
        }
    }
}
