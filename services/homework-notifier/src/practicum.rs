//! Practicum homework-status API client

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde_json::Value;

use crate::io::HttpClient;
use crate::NotifierError;

/// Source of homework review responses
#[async_trait]
pub trait ReviewSource: Send + Sync + std::fmt::Debug {
    /// Fetch review data changed since `from_date`, or since now when absent
    async fn get_api_answer(&self, from_date: Option<i64>) -> crate::Result<Value>;
}

/// Client for the Practicum `homework_statuses` endpoint
pub struct PracticumClient {
    endpoint: String,
    authorization: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created PracticumClient for {}", endpoint);
        Self {
            endpoint: endpoint.to_string(),
            authorization: format!("OAuth {}", token),
            http,
        }
    }
}

#[async_trait]
impl ReviewSource for PracticumClient {
    async fn get_api_answer(&self, from_date: Option<i64>) -> crate::Result<Value> {
        let timestamp = from_date.unwrap_or_else(current_epoch_secs).to_string();
        let headers = [("Authorization", self.authorization.as_str())];
        let query = [("from_date", timestamp.as_str())];

        let response = self
            .http
            .get(&self.endpoint, &headers, &query)
            .await
            .map_err(|e| {
                tracing::error!("Ошибка при запросе к API yandex practicum: {}", e);
                NotifierError::RequestFailed(e.to_string())
            })?;

        if response.status != 200 {
            tracing::error!("Ошибка! Status_code {}", response.status);
            return Err(NotifierError::RequestFailed(format!(
                "Ошибка! Status_code {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            tracing::error!("Ответ от API не является JSON: {}", e);
            NotifierError::RequestFailed(format!("некорректный JSON в ответе: {}", e))
        })
    }
}

pub(crate) fn current_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
