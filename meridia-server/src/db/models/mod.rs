//! Database record types

pub mod tour;

pub use tour::TourRecord;
