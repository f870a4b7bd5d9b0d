//! Tour Model
//!
//! The itinerary product sold to clients, its ordered day sequence and the
//! draft/create payloads used by the creation flow.
//!
//! Invariant: `days` is 1-indexed and contiguous at all times — the day
//! number of the Nth entry is always N. Mutations go through [`Tour::push_day`]
//! and [`Tour::remove_day`], which keep the sequence renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calendar month, serialized as the English month name ("June").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown month: {0}")]
pub struct ParseMonthError(String);

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseMonthError(needle.to_string()))
    }
}

/// Arrival airport details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    #[serde(default)]
    pub name: String,
    /// 3-letter IATA code
    #[serde(default)]
    pub code: String,
    /// Transfer policy, e.g. "Todos"
    #[serde(default = "default_transfers")]
    pub transfers_included: String,
}

fn default_transfers() -> String {
    "Todos".to_string()
}

impl Default for Airport {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            transfers_included: default_transfers(),
        }
    }
}

/// Per-day pricing in MXN
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayPricing {
    #[serde(rename = "adultPriceMXN", default)]
    pub adult_price_mxn: f64,
    #[serde(rename = "childPriceMXN", default)]
    pub child_price_mxn: f64,
}

/// One itinerary entry within a Tour
///
/// A day has no identity outside its parent tour; its `day` number is derived
/// from its position in the sequence, never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDay {
    pub day: u32,
    pub activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub drop_off: String,
    #[serde(default)]
    pub departures: String,
    #[serde(default)]
    pub total_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,
    #[serde(default)]
    pub cancelation_policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_included: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default)]
    pub pricing: DayPricing,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<String>,
}

/// Tour entity
///
/// `id` is a store-native opaque token, assigned on creation and absent on
/// unsaved drafts. Clients never construct ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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

impl Tour {
    /// Append a day at the end of the itinerary, assigning the next
    /// sequential number. Returns the assigned number.
    pub fn push_day(&mut self, mut day: TourDay) -> u32 {
        let number = self.days.len() as u32 + 1;
        day.day = number;
        self.days.push(day);
        number
    }

    /// Remove day `number` and renumber the survivors to 1..=len, preserving
    /// relative order. Returns false if no day carries that number.
    pub fn remove_day(&mut self, number: u32) -> bool {
        let before = self.days.len();
        self.days.retain(|d| d.day != number);
        if self.days.len() == before {
            return false;
        }
        self.renumber_days();
        true
    }

    /// Reassign day numbers from positions (1-indexed).
    pub fn renumber_days(&mut self) {
        for (index, day) in self.days.iter_mut().enumerate() {
            day.day = index as u32 + 1;
        }
    }

    /// Check the days-contiguous invariant: `days[i].day == i + 1`.
    pub fn days_contiguous(&self) -> bool {
        self.days
            .iter()
            .enumerate()
            .all(|(index, day)| day.day == index as u32 + 1)
    }
}

/// Validated create payload — the body of `POST /tours`
///
/// All optional fields are defaulted by the store on creation, see
/// [`TourCreate::into_tour`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourCreate {
    pub tour_name: String,
    pub month: Month,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport: Option<Airport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<TourDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compania: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destino: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub especial: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<String>>,
}

impl TourCreate {
    /// Materialize the creation defaults: year falls back to `default_year`
    /// (the current calendar year at the store), arrival/departure day to 1,
    /// airport to an empty name/code with transfers "Todos", days and tag
    /// lists to empty. The resulting tour has no id yet.
    pub fn into_tour(self, default_year: i32) -> Tour {
        let mut tour = Tour {
            id: None,
            tour_name: self.tour_name,
            year: self.year.unwrap_or(default_year),
            month: self.month,
            arrival_date: self.arrival_date.unwrap_or(1),
            departure_date: self.departure_date.unwrap_or(1),
            airport: self.airport.unwrap_or_default(),
            days: self.days.unwrap_or_default(),
            compania: self.compania.unwrap_or_default(),
            destino: self.destino.unwrap_or_default(),
            especial: self.especial.unwrap_or_default(),
            plan: self.plan.unwrap_or_default(),
        };
        tour.renumber_days();
        tour
    }
}

/// Unvalidated form draft of a tour
///
/// Distinct from [`TourCreate`]: required fields may still be missing here.
/// [`TourDraft::validate`] is the explicit draft → payload step.
#[derive(Debug, Clone, Default)]
pub struct TourDraft {
    pub tour_name: String,
    pub month: Option<Month>,
    pub year: Option<i32>,
    pub arrival_date: Option<u8>,
    pub departure_date: Option<u8>,
    pub airport: Option<Airport>,
    pub compania: Vec<String>,
    pub destino: Vec<String>,
    pub especial: Vec<String>,
    pub plan: Vec<String>,
}

/// Required field missing on a [`TourDraft`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("tourName is required")]
    MissingTourName,
    #[error("month is required")]
    MissingMonth,
}

impl TourDraft {
    pub fn validate(self) -> Result<TourCreate, DraftError> {
        if self.tour_name.trim().is_empty() {
            return Err(DraftError::MissingTourName);
        }
        let month = self.month.ok_or(DraftError::MissingMonth)?;

        fn some_if_filled(tags: Vec<String>) -> Option<Vec<String>> {
            if tags.is_empty() { None } else { Some(tags) }
        }

        Ok(TourCreate {
            tour_name: self.tour_name.trim().to_string(),
            month,
            year: self.year,
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
            airport: self.airport,
            days: None,
            compania: some_if_filled(self.compania),
            destino: some_if_filled(self.destino),
            especial: some_if_filled(self.especial),
            plan: some_if_filled(self.plan),
        })
    }
}

/// Body of a successful `DELETE /tours/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(activity: &str) -> TourDay {
        TourDay {
            day: 0,
            activity: activity.to_string(),
            link: None,
            pickup: "Hotel".to_string(),
            drop_off: "Hotel".to_string(),
            departures: "Daily".to_string(),
            total_time: "8 hrs".to_string(),
            start_time: None,
            finish_time: None,
            cancelation_policy: "No returnable".to_string(),
            meals_included: None,
            provider: None,
            pricing: DayPricing::default(),
            description: String::new(),
            pictures: vec![],
        }
    }

    fn tour_with_days(n: usize) -> Tour {
        let mut tour = TourCreate {
            tour_name: "Merida PLUS".to_string(),
            month: Month::June,
            year: None,
            arrival_date: None,
            departure_date: None,
            airport: None,
            days: None,
            compania: None,
            destino: None,
            especial: None,
            plan: None,
        }
        .into_tour(2026);
        for i in 0..n {
            tour.push_day(day(&format!("Activity {}", i + 1)));
        }
        tour
    }

    #[test]
    fn push_day_assigns_next_number() {
        let mut tour = tour_with_days(0);
        assert_eq!(tour.push_day(day("Chichén Itzá")), 1);
        assert_eq!(tour.push_day(day("Cenotes")), 2);
        assert!(tour.days_contiguous());
    }

    #[test]
    fn remove_middle_day_renumbers_survivors() {
        let mut tour = tour_with_days(3);
        assert!(tour.remove_day(2));

        assert_eq!(tour.days.len(), 2);
        assert_eq!(tour.days[0].activity, "Activity 1");
        assert_eq!(tour.days[1].activity, "Activity 3");
        assert_eq!(tour.days[1].day, 2);
        assert!(tour.days_contiguous());
    }

    #[test]
    fn remove_then_push_appends_at_end() {
        // Removing any day K from N days, then re-adding, yields N days with
        // the new day numbered N.
        for k in 1..=4u32 {
            let mut tour = tour_with_days(4);
            assert!(tour.remove_day(k));
            let number = tour.push_day(day("Replacement"));
            assert_eq!(number, 4);
            assert_eq!(tour.days.len(), 4);
            assert!(tour.days_contiguous());
        }
    }

    #[test]
    fn remove_unknown_day_is_a_noop() {
        let mut tour = tour_with_days(2);
        assert!(!tour.remove_day(7));
        assert_eq!(tour.days.len(), 2);
    }

    #[test]
    fn contiguity_holds_under_mixed_edits() {
        let mut tour = tour_with_days(0);
        for i in 0..6 {
            tour.push_day(day(&format!("D{i}")));
            assert!(tour.days_contiguous());
        }
        for number in [3, 1, 4] {
            assert!(tour.remove_day(number));
            assert!(tour.days_contiguous());
        }
        tour.push_day(day("Tail"));
        assert!(tour.days_contiguous());
        assert_eq!(tour.days.last().unwrap().day, 4);
    }

    #[test]
    fn create_defaults() {
        let tour = TourCreate {
            tour_name: "Merida PLUS".to_string(),
            month: Month::June,
            year: None,
            arrival_date: None,
            departure_date: None,
            airport: None,
            days: None,
            compania: None,
            destino: None,
            especial: None,
            plan: None,
        }
        .into_tour(2026);

        assert_eq!(tour.year, 2026);
        assert_eq!(tour.arrival_date, 1);
        assert_eq!(tour.departure_date, 1);
        assert_eq!(tour.airport.name, "");
        assert_eq!(tour.airport.code, "");
        assert_eq!(tour.airport.transfers_included, "Todos");
        assert!(tour.days.is_empty());
        assert!(tour.compania.is_empty());
        assert!(tour.id.is_none());
    }

    #[test]
    fn draft_requires_name_and_month() {
        let draft = TourDraft {
            month: Some(Month::June),
            ..TourDraft::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingTourName));

        let draft = TourDraft {
            tour_name: "Merida PLUS".to_string(),
            ..TourDraft::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingMonth));

        let draft = TourDraft {
            tour_name: "  Merida PLUS ".to_string(),
            month: Some(Month::June),
            ..TourDraft::default()
        };
        let create = draft.validate().unwrap();
        assert_eq!(create.tour_name, "Merida PLUS");
    }

    #[test]
    fn month_parses_case_insensitively() {
        assert_eq!("june".parse::<Month>().unwrap(), Month::June);
        assert_eq!(" December ".parse::<Month>().unwrap(), Month::December);
        assert!("Juno".parse::<Month>().is_err());
    }

    #[test]
    fn wire_field_names_match_store_documents() {
        let tour = tour_with_days(1);
        let json = serde_json::to_value(&tour).unwrap();
        assert!(json.get("tourName").is_some());
        assert_eq!(json["month"], "June");
        assert!(json.get("arrivalDate").is_some());
        assert!(json["airport"].get("transfersIncluded").is_some());
        let day = &json["days"][0];
        assert!(day.get("dropOff").is_some());
        assert!(day.get("totalTime").is_some());
        assert!(day.get("cancelationPolicy").is_some());
        assert!(day["pricing"].get("adultPriceMXN").is_some());
    }
}
