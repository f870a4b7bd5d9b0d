//! HTTP client for the Meridia REST API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::{DeleteConfirmation, Tour, TourCreate};

use crate::api::TourApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Error body returned by the server on any failure
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for making network requests to the Meridia server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Map the response: success bodies deserialize to `T`, failures carry
    /// an `{"error": ...}` body keyed by status.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Transport(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl TourApi for HttpClient {
    async fn list_tours(&self) -> ClientResult<Vec<Tour>> {
        self.get("/tours").await
    }

    async fn submit_tour(&self, create: &TourCreate) -> ClientResult<Tour> {
        self.post("/tours", create).await
    }

    async fn update_tour(&self, id: &str, tour: &Tour) -> ClientResult<Tour> {
        self.put(&format!("/tours/{id}"), tour).await
    }

    async fn delete_tour(&self, id: &str) -> ClientResult<()> {
        let _: DeleteConfirmation = self.delete(&format!("/tours/{id}")).await?;
        Ok(())
    }
}
