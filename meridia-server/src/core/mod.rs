//! Core server building blocks
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared handler state (db + directory)
//! - [`Server`] - HTTP server lifecycle
//! - [`ServerError`] - startup/runtime errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
