//! Tour list state
//!
//! Holds the fetched catalog and the current selection. The selection is
//! tracked by id, so a refresh keeps it alive as long as the tour still
//! exists on the server.

use shared::Tour;

#[derive(Debug, Default, Clone)]
pub struct TourListState {
    tours: Vec<Tour>,
    selected: Option<Tour>,
}

impl TourListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn selected(&self) -> Option<&Tour> {
        self.selected.as_ref()
    }

    /// Replace the list, re-resolving the selection by id against the new
    /// contents. A selection whose tour is gone is dropped.
    pub fn set_tours(&mut self, tours: Vec<Tour>) {
        self.tours = tours;
        if let Some(selected_id) = self.selected.as_ref().and_then(|t| t.id.clone()) {
            self.selected = self
                .tours
                .iter()
                .find(|t| t.id.as_deref() == Some(selected_id.as_str()))
                .cloned();
        }
    }

    /// Select the tour with `id`. Returns false if it is not in the list.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tours.iter().find(|t| t.id.as_deref() == Some(id)) {
            Some(tour) => {
                self.selected = Some(tour.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Swap in a server echo: the list entry and, when it is the selected
    /// tour, the selection are both replaced.
    pub fn replace_tour(&mut self, tour: Tour) {
        if let Some(id) = tour.id.as_deref() {
            if let Some(entry) = self.tours.iter_mut().find(|t| t.id.as_deref() == Some(id)) {
                *entry = tour.clone();
            }
            if self.selected.as_ref().and_then(|t| t.id.as_deref()) == Some(id) {
                self.selected = Some(tour);
            }
        }
    }

    /// Drop a deleted tour, clearing the selection if it pointed there.
    pub fn remove_tour(&mut self, id: &str) {
        self.tours.retain(|t| t.id.as_deref() != Some(id));
        if self.selected.as_ref().and_then(|t| t.id.as_deref()) == Some(id) {
            self.selected = None;
        }
    }

    /// Append a freshly created tour.
    pub fn push_tour(&mut self, tour: Tour) {
        self.tours.push(tour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Airport, Month};

    fn tour(id: &str, name: &str) -> Tour {
        Tour {
            id: Some(id.to_string()),
            tour_name: name.to_string(),
            year: 2026,
            month: Month::June,
            arrival_date: 1,
            departure_date: 1,
            airport: Airport::default(),
            days: vec![],
            compania: vec![],
            destino: vec![],
            especial: vec![],
            plan: vec![],
        }
    }

    #[test]
    fn refresh_keeps_selection_alive_by_id() {
        let mut state = TourListState::new();
        state.set_tours(vec![tour("tour:a", "Merida PLUS"), tour("tour:b", "Uxmal")]);
        assert!(state.select("tour:a"));

        // Refresh with a renamed version of the selected tour.
        state.set_tours(vec![tour("tour:a", "Merida PLUS v2"), tour("tour:b", "Uxmal")]);
        assert_eq!(state.selected().unwrap().tour_name, "Merida PLUS v2");

        // Refresh without it drops the selection.
        state.set_tours(vec![tour("tour:b", "Uxmal")]);
        assert!(state.selected().is_none());
    }

    #[test]
    fn replace_tour_updates_list_and_selection() {
        let mut state = TourListState::new();
        state.set_tours(vec![tour("tour:a", "Merida PLUS")]);
        state.select("tour:a");

        state.replace_tour(tour("tour:a", "Merida PLUS v2"));
        assert_eq!(state.tours()[0].tour_name, "Merida PLUS v2");
        assert_eq!(state.selected().unwrap().tour_name, "Merida PLUS v2");
    }

    #[test]
    fn remove_tour_clears_matching_selection() {
        let mut state = TourListState::new();
        state.set_tours(vec![tour("tour:a", "Merida PLUS"), tour("tour:b", "Uxmal")]);
        state.select("tour:a");

        state.remove_tour("tour:a");
        assert_eq!(state.tours().len(), 1);
        assert!(state.selected().is_none());
    }
}
