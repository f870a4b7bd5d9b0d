//! Tour API seam
//!
//! [`TourApi`] is the trait the editing state talks through. The live
//! implementation is [`crate::HttpClient`]; tests substitute an in-memory
//! double.

use async_trait::async_trait;

use shared::{Tour, TourCreate, TourDraft};

use crate::error::{ClientError, ClientResult};

#[async_trait]
pub trait TourApi: Send + Sync {
    /// Fetch the whole catalog.
    async fn list_tours(&self) -> ClientResult<Vec<Tour>>;

    /// Submit a validated create payload to the store.
    async fn submit_tour(&self, create: &TourCreate) -> ClientResult<Tour>;

    /// Replace the whole document for `id`.
    async fn update_tour(&self, id: &str, tour: &Tour) -> ClientResult<Tour>;

    /// Hard delete.
    async fn delete_tour(&self, id: &str) -> ClientResult<()>;

    /// Validate a form draft and, only if it passes, submit it.
    ///
    /// An invalid draft never reaches the store.
    async fn create_tour(&self, draft: TourDraft) -> ClientResult<Tour> {
        let create = draft
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.submit_tour(&create).await
    }
}

#[async_trait]
impl<T: TourApi + ?Sized> TourApi for std::sync::Arc<T> {
    async fn list_tours(&self) -> ClientResult<Vec<Tour>> {
        (**self).list_tours().await
    }

    async fn submit_tour(&self, create: &TourCreate) -> ClientResult<Tour> {
        (**self).submit_tour(create).await
    }

    async fn update_tour(&self, id: &str, tour: &Tour) -> ClientResult<Tour> {
        (**self).update_tour(id, tour).await
    }

    async fn delete_tour(&self, id: &str) -> ClientResult<()> {
        (**self).delete_tour(id).await
    }

    async fn create_tour(&self, draft: TourDraft) -> ClientResult<Tour> {
        (**self).create_tour(draft).await
    }
}
