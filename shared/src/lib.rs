//! Shared types for the Meridia back-office
//!
//! Wire-level data model used by both `meridia-server` and `meridia-client`:
//!
//! - **Tours** (`models::tour`): the itinerary product, its day sequence and
//!   the draft/create payloads used by the creation flow
//! - **Directory** (`models::{client, advisor, quote, video_call}`): the
//!   secondary back-office entities with their status enums
//!
//! JSON field names match the store documents (`tourName`, `dropOff`,
//! `adultPriceMXN`, ...), so a serialized `Tour` round-trips unchanged
//! through the REST surface.

pub mod models;

pub use models::advisor::{Advisor, AdvisorCreate};
pub use models::client::{Client, ClientCreate};
pub use models::quote::{Quote, QuoteCreate, QuoteStatus, QuoteType};
pub use models::tour::{
    Airport, DayPricing, DeleteConfirmation, DraftError, Month, Tour, TourCreate, TourDay,
    TourDraft,
};
pub use models::video_call::{VideoCall, VideoCallCategory, VideoCallCreate, VideoCallStatus};
