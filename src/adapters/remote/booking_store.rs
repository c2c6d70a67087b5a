//! Remote booking store adapter.
//!
//! Sends bookings to an HTTP booking service. The service answers 201 with
//! the created record, 409 for a duplicate email, 400 with a message when it
//! rejects the request, and 5xx on failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::booking::{BookingRecord, BookingStatus, NewBooking};
use crate::domain::foundation::{BookingId, Timestamp};
use crate::ports::{BookingStore, StoreError};

/// Remote store configuration.
#[derive(Clone)]
pub struct RemoteStoreConfig {
    /// Base URL of the booking service, without trailing slash.
    base_url: String,
    /// Bearer key, sent only when set.
    service_key: Option<SecretString>,
    /// Per-request timeout.
    timeout: Duration,
}

impl RemoteStoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_service_key(mut self, key: SecretString) -> Self {
        self.service_key = Some(key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Created-booking body. Only `id` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBody {
    id: BookingId,
    #[serde(default)]
    status: Option<BookingStatus>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Error body; services use either `error` or `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.trim().is_empty())
    }
}

/// HTTP implementation of the BookingStore port.
pub struct RemoteBookingStore {
    config: RemoteStoreConfig,
    http_client: reqwest::Client,
}

impl RemoteBookingStore {
    pub fn new(config: RemoteStoreConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn bookings_url(&self) -> String {
        format!("{}/bookings", self.config.base_url)
    }
}

/// Maps a non-success status and body to the store error.
fn classify_failure(status: StatusCode, body: &str) -> StoreError {
    match status {
        StatusCode::CONFLICT => StoreError::DuplicateEmail,
        StatusCode::BAD_REQUEST => match ErrorBody::parse(body).into_message() {
            Some(message) => StoreError::Rejected(message),
            None => StoreError::Rejected("The booking request was rejected".to_string()),
        },
        other => StoreError::Unavailable(format!("booking service returned {}", other)),
    }
}

#[async_trait]
impl BookingStore for RemoteBookingStore {
    async fn create(&self, booking: &NewBooking) -> Result<BookingRecord, StoreError> {
        let mut request = self
            .http_client
            .post(self.bookings_url())
            .timeout(self.config.timeout)
            .json(booking);
        if let Some(key) = &self.config.service_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Booking service request failed");
            StoreError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::CREATED && status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            if status.is_server_error() {
                tracing::error!(status = %status, body = %body, "Booking service failed");
            }
            return Err(classify_failure(status, &body));
        }

        let created: CreatedBody = response.json().await.map_err(|e| {
            StoreError::Unavailable(format!("Failed to parse booking service response: {}", e))
        })?;

        let mut record = BookingRecord::pending(
            created.id,
            booking.clone(),
            created.created_at.map(Timestamp::from_datetime).unwrap_or_else(Timestamp::now),
        );
        if let Some(status) = created.status {
            record.status = status;
        }
        Ok(record)
    }
}
