//! Itinerary day editor
//!
//! Drives edits to the selected tour's day sequence. Every mutation is
//! staged on a clone, persisted with a whole-document `PUT`, and only then
//! folded back into local state from the server echo. A failed persist
//! leaves the local state exactly as it was.

use shared::{DayPricing, Tour, TourDay, TourDraft};
use tracing::debug;

use crate::api::TourApi;
use crate::error::{ClientError, ClientResult};
use crate::state::TourListState;

/// In-progress day form
///
/// Only the fields the editor exposes; the remaining `TourDay` fields take
/// their creation defaults when the draft is committed.
#[derive(Debug, Clone, Default)]
pub struct DayDraft {
    pub activity: String,
    pub pickup: String,
    pub drop_off: String,
    pub total_time: String,
    pub description: String,
    pub pricing: DayPricing,
    pub pictures: Vec<String>,
}

impl DayDraft {
    /// Convert to a day entry. The day number is a placeholder; the tour
    /// assigns the real one on append.
    fn into_day(self) -> TourDay {
        TourDay {
            day: 0,
            activity: self.activity,
            link: None,
            pickup: self.pickup,
            drop_off: self.drop_off,
            departures: "Daily".to_string(),
            total_time: self.total_time,
            start_time: None,
            finish_time: None,
            cancelation_policy: "No returnable".to_string(),
            meals_included: None,
            provider: None,
            pricing: self.pricing,
            description: self.description,
            pictures: self.pictures,
        }
    }
}

/// Editor over the tour list and the selected tour's itinerary
pub struct ItineraryEditor<A: TourApi> {
    api: A,
    state: TourListState,
    draft: Option<DayDraft>,
}

impl<A: TourApi> ItineraryEditor<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TourListState::new(),
            draft: None,
        }
    }

    pub fn state(&self) -> &TourListState {
        &self.state
    }

    pub fn selected(&self) -> Option<&Tour> {
        self.state.selected()
    }

    pub fn draft(&self) -> Option<&DayDraft> {
        self.draft.as_ref()
    }

    /// Fetch the catalog, keeping the current selection where possible.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let tours = self.api.list_tours().await?;
        self.state.set_tours(tours);
        Ok(())
    }

    /// Select the tour to edit. Clears any open day draft.
    pub fn select(&mut self, id: &str) -> bool {
        let found = self.state.select(id);
        if found {
            self.draft = None;
        }
        found
    }

    /// Open an empty day draft for the selected tour.
    pub fn begin_day(&mut self) -> ClientResult<&mut DayDraft> {
        if self.state.selected().is_none() {
            return Err(ClientError::Validation("no tour selected".to_string()));
        }
        Ok(self.draft.get_or_insert_with(DayDraft::default))
    }

    pub fn draft_mut(&mut self) -> Option<&mut DayDraft> {
        self.draft.as_mut()
    }

    /// Discard the open day draft without touching the store.
    pub fn cancel_day(&mut self) {
        self.draft = None;
    }

    /// Commit the open day draft: append it to the selected tour and
    /// persist. On failure the draft stays open and local state is
    /// untouched.
    pub async fn commit_day(&mut self) -> ClientResult<u32> {
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| ClientError::Validation("no day draft open".to_string()))?;

        if draft.activity.trim().is_empty() {
            return Err(ClientError::Validation(
                "activity must not be empty".to_string(),
            ));
        }

        let selected = self
            .state
            .selected()
            .ok_or_else(|| ClientError::Validation("no tour selected".to_string()))?;
        let id = selected
            .id
            .clone()
            .ok_or_else(|| ClientError::Validation("selected tour is unsaved".to_string()))?;

        let mut staged = selected.clone();
        let draft = self.draft.take().unwrap_or_default();
        let number = staged.push_day(draft.clone().into_day());

        match self.api.update_tour(&id, &staged).await {
            Ok(echo) => {
                debug!(tour = %id, day = number, "Day committed");
                self.state.replace_tour(echo);
                Ok(number)
            }
            Err(e) => {
                // Reopen the draft so nothing typed is lost.
                self.draft = Some(draft);
                Err(e)
            }
        }
    }

    /// Remove day `number` from the selected tour and persist. Survivors
    /// are renumbered to stay contiguous.
    pub async fn remove_day(&mut self, number: u32) -> ClientResult<()> {
        let selected = self
            .state
            .selected()
            .ok_or_else(|| ClientError::Validation("no tour selected".to_string()))?;
        let id = selected
            .id
            .clone()
            .ok_or_else(|| ClientError::Validation("selected tour is unsaved".to_string()))?;

        let mut staged = selected.clone();
        if !staged.remove_day(number) {
            return Err(ClientError::Validation(format!("no day {number}")));
        }

        let echo = self.api.update_tour(&id, &staged).await?;
        self.state.replace_tour(echo);
        Ok(())
    }

    /// Delete the selected tour from the store and drop it locally.
    pub async fn delete_selected(&mut self) -> ClientResult<()> {
        let id = self
            .state
            .selected()
            .and_then(|t| t.id.clone())
            .ok_or_else(|| ClientError::Validation("no tour selected".to_string()))?;

        self.api.delete_tour(&id).await?;
        self.state.remove_tour(&id);
        self.draft = None;
        Ok(())
    }

    /// Create a tour from a form draft and append it to the local list.
    pub async fn create_tour(&mut self, draft: TourDraft) -> ClientResult<Tour> {
        let tour = self.api.create_tour(draft).await?;
        self.state.push_tour(tour.clone());
        Ok(tour)
    }
}
