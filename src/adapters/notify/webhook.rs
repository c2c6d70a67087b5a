//! Notifier that posts the booking notification to a webhook.
//!
//! When a signing secret is configured, the request carries
//! `X-Booking-Signature: sha256=<hex>` with the HMAC-SHA256 of the raw body.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::Duration;

use crate::domain::booking::BookingNotification;
use crate::ports::{BookingNotifier, NotificationError};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "X-Booking-Signature";

/// Webhook notifier configuration.
#[derive(Clone)]
pub struct WebhookConfig {
    url: String,
    signing_secret: Option<SecretString>,
    timeout: Duration,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            signing_secret: None,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_signing_secret(mut self, secret: SecretString) -> Self {
        self.signing_secret = Some(secret);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Computes the signature header value for `body`.
pub fn sign_payload(secret: &SecretString, body: &[u8]) -> Result<String, NotificationError> {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|e| NotificationError::Configuration(format!("invalid signing secret: {}", e)))?;
    mac.update(body);
    Ok(format!("sha256={}", hex::encode(mac.finalize().into_bytes())))
}

/// Posts notifications as JSON.
pub struct WebhookNotifier {
    config: WebhookConfig,
    http_client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingNotifier for WebhookNotifier {
    async fn notify(&self, notification: &BookingNotification) -> Result<(), NotificationError> {
        let body = serde_json::to_vec(notification)
            .map_err(|e| NotificationError::Delivery(format!("failed to encode payload: {}", e)))?;

        let mut request = self
            .http_client
            .post(&self.config.url)
            .timeout(self.config.timeout)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(secret) = &self.config.signing_secret {
            request = request.header(SIGNATURE_HEADER, sign_payload(secret, &body)?);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| NotificationError::Delivery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotificationError::Delivery(format!(
                "webhook returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookingType, ValidatedBooking};
    use crate::domain::foundation::BookingId;
    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(Option<String>, Vec<u8>)>>>;

    fn notification() -> BookingNotification {
        let booking = ValidatedBooking {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            phone_number: None,
            booking_type: BookingType::Consultation,
            preferred_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            preferred_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            preferred_at: Utc.with_ymd_and_hms(2024, 6, 5, 14, 0, 0).unwrap(),
            message: Some("Automate invoicing".into()),
        };
        BookingNotification::new(BookingId::new(), &booking)
    }

    async fn receive(State((status, seen)): State<(StatusCode, Seen)>, headers: HeaderMap, body: Bytes) -> StatusCode {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        seen.lock().unwrap().push((signature, body.to_vec()));
        status
    }

    async fn serve(status: StatusCode) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/hook", post(receive))
            .with_state((status, seen.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/hook", addr), seen)
    }

    #[test]
    fn signature_is_hex_hmac() {
        let secret = SecretString::new("whsec".into());
        let signature = sign_payload(&secret, b"{}").unwrap();

        let mut mac = HmacSha256::new_from_slice(b"whsec").unwrap();
        mac.update(b"{}");
        let expected = format!("sha256={}", hex::encode(mac.finalize().into_bytes()));
        assert_eq!(signature, expected);
        assert_eq!(signature.len(), "sha256=".len() + 64);
    }

    #[tokio::test]
    async fn posts_signed_json() {
        let (url, seen) = serve(StatusCode::NO_CONTENT).await;
        let secret = SecretString::new("whsec".into());
        let notifier = WebhookNotifier::new(WebhookConfig::new(url).with_signing_secret(secret.clone()));

        notifier.notify(&notification()).await.unwrap();

        let seen = seen.lock().unwrap();
        let (signature, body) = &seen[0];
        assert_eq!(signature.as_deref(), Some(sign_payload(&secret, body).unwrap().as_str()));

        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json["customerName"], "Jane Doe");
        assert_eq!(json["preferredDate"], "2024-06-05");
    }

    #[tokio::test]
    async fn unsigned_when_no_secret() {
        let (url, seen) = serve(StatusCode::OK).await;
        WebhookNotifier::new(WebhookConfig::new(url))
            .notify(&notification())
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap()[0].0, None);
    }

    #[tokio::test]
    async fn error_status_is_delivery_failure() {
        let (url, _seen) = serve(StatusCode::INTERNAL_SERVER_ERROR).await;
        let result = WebhookNotifier::new(WebhookConfig::new(url)).notify(&notification()).await;
        assert!(matches!(result, Err(NotificationError::Delivery(_))));
    }
}
