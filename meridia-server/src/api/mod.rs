//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`tours`] - tour catalog (document store)
//! - [`clients`] - client directory
//! - [`advisors`] - advisor directory
//! - [`quotes`] - quote registry
//! - [`video_calls`] - video call scheduling

pub mod advisors;
pub mod clients;
pub mod health;
pub mod quotes;
pub mod tours;
pub mod video_calls;

pub use crate::utils::{AppError, AppResult};
