//! Directory Module
//!
//! In-memory registry for the secondary back-office entities: clients,
//! advisors, quotes and video calls. Contents are seeded at startup and not
//! persisted; only tours go through the document store.

mod seed;

use chrono::Utc;
use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use shared::{
    Advisor, AdvisorCreate, Client, ClientCreate, Quote, QuoteCreate, QuoteStatus, VideoCall,
    VideoCallCreate, VideoCallStatus,
};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Concurrent in-memory entity registry
#[derive(Debug, Default)]
pub struct Directory {
    clients: DashMap<String, Client>,
    advisors: DashMap<String, Advisor>,
    quotes: DashMap<String, Quote>,
    video_calls: DashMap<String, VideoCall>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory pre-populated with the demo dataset.
    pub fn with_seed_data() -> Self {
        let directory = Self::new();
        seed::populate(&directory);
        directory
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn advisor_count(&self) -> usize {
        self.advisors.len()
    }

    /// List clients, oldest first.
    pub fn list_clients(&self) -> Vec<Client> {
        let mut clients: Vec<Client> = self.clients.iter().map(|e| e.value().clone()).collect();
        clients.sort_by_key(|c| c.created_at);
        clients
    }

    pub fn add_client(&self, data: ClientCreate) -> DirectoryResult<Client> {
        if data.name.trim().is_empty() {
            return Err(DirectoryError::Validation("name must not be empty".into()));
        }

        let client = Client {
            id: new_id(),
            name: data.name.trim().to_string(),
            email: data.email,
            phone: data.phone,
            reservation_number: data.reservation_number,
            created_at: Utc::now(),
        };
        self.clients.insert(client.id.clone(), client.clone());
        Ok(client)
    }

    /// List advisors, oldest first.
    pub fn list_advisors(&self) -> Vec<Advisor> {
        let mut advisors: Vec<Advisor> = self.advisors.iter().map(|e| e.value().clone()).collect();
        advisors.sort_by_key(|a| a.created_at);
        advisors
    }

    pub fn add_advisor(&self, data: AdvisorCreate) -> DirectoryResult<Advisor> {
        if data.name.trim().is_empty() {
            return Err(DirectoryError::Validation("name must not be empty".into()));
        }

        let advisor = Advisor {
            id: new_id(),
            name: data.name.trim().to_string(),
            email: data.email,
            phone: data.phone,
            created_at: Utc::now(),
            video_calls: 0,
            quotes: 0,
        };
        self.advisors.insert(advisor.id.clone(), advisor.clone());
        Ok(advisor)
    }

    /// List quotes, newest first.
    pub fn list_quotes(&self) -> Vec<Quote> {
        let mut quotes: Vec<Quote> = self.quotes.iter().map(|e| e.value().clone()).collect();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        quotes
    }

    /// Register a quote. The advisor must exist; its `quotes` counter is
    /// bumped as part of the same call.
    pub fn add_quote(&self, data: QuoteCreate) -> DirectoryResult<Quote> {
        let mut advisor = self
            .advisors
            .get_mut(&data.advisor_id)
            .ok_or_else(|| DirectoryError::NotFound(format!("Advisor {}", data.advisor_id)))?;

        let quote = Quote {
            id: new_id(),
            client_id: data.client_id,
            client_name: data.client_name,
            advisor_id: data.advisor_id.clone(),
            tour_id: data.tour_id,
            tour_name: data.tour_name,
            status: QuoteStatus::Pending,
            quote_type: data.quote_type,
            total_price: data.total_price,
            comments: data.comments,
            created_at: Utc::now(),
        };
        advisor.quotes += 1;
        self.quotes.insert(quote.id.clone(), quote.clone());
        Ok(quote)
    }

    pub fn set_quote_status(&self, id: &str, status: QuoteStatus) -> DirectoryResult<Quote> {
        let mut quote = self
            .quotes
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(format!("Quote {}", id)))?;
        quote.status = status;
        Ok(quote.clone())
    }

    /// List video calls, soonest scheduled first.
    pub fn list_video_calls(&self) -> Vec<VideoCall> {
        let mut calls: Vec<VideoCall> = self.video_calls.iter().map(|e| e.value().clone()).collect();
        calls.sort_by_key(|c| c.scheduled_at);
        calls
    }

    pub fn add_video_call(&self, data: VideoCallCreate) -> DirectoryResult<VideoCall> {
        let call = VideoCall {
            id: new_id(),
            client_id: data.client_id,
            client_name: data.client_name,
            advisor_id: None,
            advisor_name: None,
            category: data.category,
            status: VideoCallStatus::Scheduled,
            scheduled_at: data.scheduled_at,
            notes: data.notes,
        };
        self.video_calls.insert(call.id.clone(), call.clone());
        Ok(call)
    }

    /// Assign a call to an advisor, denormalizing the advisor's name onto
    /// the call and bumping the advisor's `video_calls` counter.
    pub fn assign_video_call(&self, id: &str, advisor_id: &str) -> DirectoryResult<VideoCall> {
        let mut advisor = self
            .advisors
            .get_mut(advisor_id)
            .ok_or_else(|| DirectoryError::NotFound(format!("Advisor {}", advisor_id)))?;

        let mut call = self
            .video_calls
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(format!("Video call {}", id)))?;

        // Reassignment does not double-count the previous advisor.
        if call.advisor_id.as_deref() != Some(advisor_id) {
            advisor.video_calls += 1;
        }
        call.advisor_id = Some(advisor.id.clone());
        call.advisor_name = Some(advisor.name.clone());
        Ok(call.clone())
    }

    pub fn set_video_call_status(
        &self,
        id: &str,
        status: VideoCallStatus,
    ) -> DirectoryResult<VideoCall> {
        let mut call = self
            .video_calls
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(format!("Video call {}", id)))?;
        call.status = status;
        Ok(call.clone())
    }
}
