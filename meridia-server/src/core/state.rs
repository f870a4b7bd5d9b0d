use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::directory::Directory;

/// Shared handler state
///
/// Cloned into every handler; `Surreal<Db>` and `Arc` make the clone cheap.
/// The database handle is opened once at startup and reused for every
/// request — there is no per-request connection lifecycle.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded tour store (SurrealDB)
    pub db: Surreal<Db>,
    /// In-memory directory of clients, advisors, quotes and video calls
    pub directory: Arc<Directory>,
}

impl ServerState {
    /// Initialize the server state:
    ///
    /// 1. ensure the data directory exists
    /// 2. open the embedded tour store at `DATA_DIR/meridia.db`
    /// 3. seed the in-memory directory
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let db_path = config.database_path();
        let db = DbService::open(&db_path.to_string_lossy()).await?.db;

        let directory = Arc::new(Directory::with_seed_data());
        tracing::info!(
            clients = directory.client_count(),
            advisors = directory.advisor_count(),
            "Directory seeded"
        );

        Ok(Self {
            config: config.clone(),
            db,
            directory,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
