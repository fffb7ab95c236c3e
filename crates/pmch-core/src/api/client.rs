//! API client for the PMCH REST API.
//!
//! Each `fetch_*` method unwraps the response envelope and returns the
//! payload, so they slot straight into a `CachedFetch` producer.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::models::{
    ApiResponse, ContactType, Department, EmergencyContact, Faq, HealthStatus, OpdTiming,
};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default page size requested for the department list.
/// The server caps pages at 50; 50 covers the whole hospital in one call.
pub const DEPARTMENTS_PAGE_SIZE: u32 = 50;

/// API client for the PMCH data service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and return the status and raw body.
    async fn send(&self, path: &str, query: &[(&str, String)]) -> Result<(StatusCode, String)> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;
        Ok((status, body))
    }

    /// GET `path` and decode the envelope. Fails when the status is not 2xx
    /// or the envelope reports `success: false`, preferring the server's
    /// own error message.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>> {
        let (status, body) = self.send(path, query).await?;
        let envelope = serde_json::from_str::<ApiResponse<T>>(&body);

        if !status.is_success() {
            let message = envelope
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| format!("API request failed: {}", status.as_u16()));
            return Err(ApiError::from_status(status, &message).into());
        }

        let envelope = envelope.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
        })?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| format!("API request failed: {}", status.as_u16()));
            return Err(ApiError::Rejected(message).into());
        }

        Ok(envelope)
    }

    /// GET and return the envelope's `data`, which must be present.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.get(path, query)
            .await?
            .data
            .ok_or_else(|| ApiError::InvalidResponse(format!("No data in response from {}", path)).into())
    }

    // ===== Departments =====

    /// One page of departments, in display order.
    pub async fn fetch_departments_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<ApiResponse<Vec<Department>>> {
        self.get(
            "/departments",
            &[("page", page.to_string()), ("pageSize", page_size.to_string())],
        )
        .await
    }

    pub async fn fetch_departments(&self, page: u32, page_size: u32) -> Result<Vec<Department>> {
        self.get_data(
            "/departments",
            &[("page", page.to_string()), ("pageSize", page_size.to_string())],
        )
        .await
    }

    pub async fn fetch_department(&self, id: i64) -> Result<Department> {
        self.get_data(&format!("/departments/{}", id), &[]).await
    }

    // ===== FAQs =====

    pub async fn fetch_faqs(&self, category: Option<&str>) -> Result<Vec<Faq>> {
        let query: Vec<(&str, String)> = category
            .map(|c| vec![("category", c.to_string())])
            .unwrap_or_default();
        self.get_data("/faqs", &query).await
    }

    // ===== Emergency Contacts =====

    pub async fn fetch_contacts(
        &self,
        contact_type: Option<ContactType>,
    ) -> Result<Vec<EmergencyContact>> {
        let query: Vec<(&str, String)> = contact_type
            .map(|t| vec![("type", t.as_str().to_string())])
            .unwrap_or_default();
        self.get_data("/contacts", &query).await
    }

    // ===== OPD Timings =====

    pub async fn fetch_opd_timings(&self) -> Result<Vec<OpdTiming>> {
        self.get_data("/opd-timings", &[]).await
    }

    // ===== Health =====

    /// The health body is flat, not an envelope.
    pub async fn health(&self) -> Result<HealthStatus> {
        let (status, body) = self.send("/health", &[]).await?;
        if !status.is_success() {
            let message = format!("API request failed: {}", status.as_u16());
            return Err(ApiError::from_status(status, &message).into());
        }
        let health: HealthStatus = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from /health: {}", e))
        })?;
        if !health.success {
            return Err(ApiError::Rejected(health.message).into());
        }
        Ok(health)
    }
}
