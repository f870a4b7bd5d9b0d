//! Database Module
//!
//! Embedded SurrealDB tour store. The handle is opened once at startup and
//! cloned into handlers; there is no explicit teardown.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::core::ServerError;

const NAMESPACE: &str = "meridia";
const DATABASE: &str = "backoffice";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB-backed store at `db_path`.
    pub async fn open(db_path: &str) -> Result<Self, ServerError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to open tour store: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(path = %db_path, "Tour store opened (embedded SurrealDB)");

        Ok(Self { db })
    }
}
