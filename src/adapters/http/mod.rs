//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; [`app_router`] assembles them
//! with tracing, CORS and request-timeout layers.

pub mod booking;
pub mod health;

use std::time::Duration;

use http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use booking::{booking_router, BookingAppState};
pub use health::health_router;

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Allowed origins; empty allows any.
    pub cors_origins: Vec<String>,
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(parsed)
    }
}

/// Builds the full application router.
pub fn app_router(state: BookingAppState, settings: &HttpSettings) -> Router {
    booking_router()
        .merge(health_router())
        .with_state(state)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingStore;
    use crate::adapters::notify::DisabledNotifier;
    use crate::application::handlers::booking::SubmitBookingHandler;
    use crate::domain::booking::{AvailabilityEngine, BookingValidator};
    use crate::domain::foundation::SystemClock;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::FixedOffset;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> BookingAppState {
        let engine = Arc::new(AvailabilityEngine::new(
            Arc::new(SystemClock),
            FixedOffset::east_opt(0).unwrap(),
        ));
        let handler = SubmitBookingHandler::new(
            Arc::new(BookingValidator::new(engine.clone())),
            Arc::new(InMemoryBookingStore::new()),
            Arc::new(DisabledNotifier),
        );
        BookingAppState::new(engine, Arc::new(handler))
    }

    fn settings(origins: &[&str]) -> HttpSettings {
        HttpSettings {
            request_timeout: Duration::from_secs(5),
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn app_serves_health_and_api() {
        let app = app_router(state(), &settings(&[]));

        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let dates = app
            .oneshot(
                Request::builder()
                    .uri("/api/availability/call/dates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(dates.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_echoes_configured_origin() {
        let app = app_router(state(), &settings(&["https://example.com"]));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://example.com"
        );
    }
}
