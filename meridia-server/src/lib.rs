//! Meridia Server - travel-agency back-office API
//!
//! # Module structure
//!
//! ```text
//! meridia-server/src/
//! ├── core/       # config, state, server, startup errors
//! ├── api/        # HTTP routes and handlers
//! ├── db/         # embedded SurrealDB tour store
//! ├── directory/  # in-memory secondary entities
//! └── utils/      # errors, logging, validation
//! ```
//!
//! The tour store is the only persisted collection; clients, advisors,
//! quotes and video calls live in an in-memory directory seeded at startup.

pub mod api;
pub mod core;
pub mod db;
pub mod directory;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use directory::Directory;
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   __  ___         _    ___
  /  |/  /__ _____(_)__/ (_)__ _
 / /|_/ / -_) __/ / _  / / _ `/
/_/  /_/\__/_/ /_/\_,_/_/\_,_/
    "#
    );
}
