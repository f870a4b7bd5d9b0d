//! Meridia Client - HTTP client and editing state for the back-office API
//!
//! Talks to the Meridia server over REST and carries the client-side editing
//! state: the tour list with its selection, the itinerary day editor, and the
//! tour creation form.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod itinerary;
pub mod state;

pub use api::TourApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::TourForm;
pub use http::HttpClient;
pub use itinerary::{DayDraft, ItineraryEditor};
pub use state::TourListState;
