//! Tour Repository
//!
//! Whole-document CRUD against the `tour` table. Every write renumbers the
//! day sequence by position, so stored documents always satisfy the
//! days-contiguous invariant.

use chrono::{Datelike, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::{Tour, TourCreate};

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::TourRecord;

const TOUR_TABLE: &str = "tour";

#[derive(Clone)]
pub struct TourRepository {
    base: BaseRepository,
}

impl TourRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tours, in the store's natural return order.
    pub async fn find_all(&self) -> RepoResult<Vec<Tour>> {
        let records: Vec<TourRecord> = self.base.db().select(TOUR_TABLE).await?;
        Ok(records.into_iter().map(TourRecord::into_tour).collect())
    }

    /// Find a tour by its opaque id.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Tour>> {
        let key = record_key(TOUR_TABLE, id);
        let record: Option<TourRecord> = self.base.db().select((TOUR_TABLE, key)).await?;
        Ok(record.map(TourRecord::into_tour))
    }

    /// Create a new tour, applying the creation defaults and assigning an id.
    pub async fn create(&self, data: TourCreate) -> RepoResult<Tour> {
        if data.tour_name.trim().is_empty() {
            return Err(RepoError::Validation("tourName must not be empty".into()));
        }

        let tour = data.into_tour(Utc::now().year());
        let record = TourRecord::from_tour(tour);

        let created: Option<TourRecord> = self
            .base
            .db()
            .create(TOUR_TABLE)
            .content(record)
            .await?;

        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create tour".to_string()))?;
        Ok(created.into_tour())
    }

    /// Replace the whole document for `id`. The body's id is ignored; the
    /// day sequence is renumbered before the write.
    pub async fn replace(&self, id: &str, mut tour: Tour) -> RepoResult<Tour> {
        let key = record_key(TOUR_TABLE, id);

        tour.renumber_days();
        let record = TourRecord::from_tour(tour);

        let updated: Option<TourRecord> = self
            .base
            .db()
            .update((TOUR_TABLE, key))
            .content(record)
            .await?;

        updated
            .map(TourRecord::into_tour)
            .ok_or_else(|| RepoError::NotFound(format!("Tour {}", id)))
    }

    /// Hard delete a tour.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let key = record_key(TOUR_TABLE, id);
        let deleted: Option<TourRecord> = self.base.db().delete((TOUR_TABLE, key)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Tour {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DayPricing, Month, TourDay};
    use surrealdb::engine::local::Mem;

    async fn test_repo() -> TourRepository {
        let db = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        TourRepository::new(db)
    }

    fn create_payload(name: &str) -> TourCreate {
        TourCreate {
            tour_name: name.to_string(),
            month: Month::June,
            year: None,
            arrival_date: None,
            departure_date: None,
            airport: None,
            days: None,
            compania: None,
            destino: None,
            especial: None,
            plan: None,
        }
    }

    fn day(number: u32, activity: &str) -> TourDay {
        TourDay {
            day: number,
            activity: activity.to_string(),
            link: None,
            pickup: String::new(),
            drop_off: String::new(),
            departures: "Daily".to_string(),
            total_time: String::new(),
            start_time: None,
            finish_time: None,
            cancelation_policy: "No returnable".to_string(),
            meals_included: None,
            provider: None,
            pricing: DayPricing::default(),
            description: String::new(),
            pictures: vec![],
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_defaults() {
        let repo = test_repo().await;

        let tour = repo.create(create_payload("Merida PLUS")).await.unwrap();

        let id = tour.id.expect("store assigns an id");
        assert!(id.starts_with("tour:"));
        assert_eq!(tour.year, Utc::now().year());
        assert_eq!(tour.arrival_date, 1);
        assert_eq!(tour.departure_date, 1);
        assert_eq!(tour.airport.transfers_included, "Todos");
        assert!(tour.days.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let repo = test_repo().await;
        let err = repo.create(create_payload("   ")).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn replace_is_whole_document_and_renumbers() {
        let repo = test_repo().await;
        let mut tour = repo.create(create_payload("Merida PLUS")).await.unwrap();
        let id = tour.id.clone().unwrap();

        // Simulate a client-side remove-day-2 on a three-day itinerary:
        // survivors arrive renumbered, but the store renumbers regardless.
        tour.days = vec![day(1, "Uno"), day(3, "Tres")];
        let updated = repo.replace(&id, tour).await.unwrap();

        assert_eq!(updated.days.len(), 2);
        assert_eq!(updated.days[0].day, 1);
        assert_eq!(updated.days[1].day, 2);
        assert_eq!(updated.days[1].activity, "Tres");
        assert!(updated.days_contiguous());

        // Echo matches a fresh read.
        let reread = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(reread, updated);
    }

    #[tokio::test]
    async fn replace_unknown_id_is_not_found() {
        let repo = test_repo().await;
        let tour = repo.create(create_payload("Merida PLUS")).await.unwrap();

        let err = repo
            .replace("tour:000000000000000000000000", tour)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_and_reports_missing() {
        let repo = test_repo().await;
        let tour = repo.create(create_payload("Merida PLUS")).await.unwrap();
        let id = tour.id.unwrap();

        repo.delete(&id).await.unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_none());

        let err = repo.delete(&id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_all_returns_every_document() {
        let repo = test_repo().await;
        repo.create(create_payload("Merida PLUS")).await.unwrap();
        repo.create(create_payload("Riviera Maya")).await.unwrap();

        let tours = repo.find_all().await.unwrap();
        assert_eq!(tours.len(), 2);
        assert!(tours.iter().all(|t| t.id.is_some()));
    }
}
