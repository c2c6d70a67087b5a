use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use consultancy_booking::adapters::http::{app_router, BookingAppState, HttpSettings};
use consultancy_booking::adapters::memory::InMemoryBookingStore;
use consultancy_booking::adapters::notify::{
    DisabledNotifier, EmailIdentity, LoggingNotifier, RecordingNotifier, WebhookConfig, WebhookNotifier,
};
use consultancy_booking::adapters::postgres::{PostgresBookingStore, PostgresNotificationLog};
use consultancy_booking::adapters::remote::{RemoteBookingStore, RemoteStoreConfig};
use consultancy_booking::application::SubmitBookingHandler;
use consultancy_booking::config::{AppConfig, NotificationConfig, NotificationMode};
use consultancy_booking::domain::booking::{AvailabilityEngine, BookingValidator};
use consultancy_booking::domain::foundation::SystemClock;
use consultancy_booking::ports::{BookingNotifier, BookingStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);
    tracing::info!("Starting consultancy-booking v{}", env!("CARGO_PKG_VERSION"));

    let zone = config.booking.zone()?;
    let engine = Arc::new(AvailabilityEngine::new(Arc::new(SystemClock), zone));
    let validator = Arc::new(BookingValidator::new(Arc::clone(&engine)));

    let pool = match &config.database {
        Some(database) => {
            let pool = database
                .connect()
                .await
                .context("Failed to connect to database")?;
            tracing::info!(migrations = database.run_migrations, "Connected to PostgreSQL");
            Some(pool)
        }
        None => None,
    };

    let store = build_store(&config, pool.clone());
    let mut notifier = build_notifier(&config.notification);
    if let Some(pool) = pool {
        notifier = Arc::new(RecordingNotifier::new(
            notifier,
            Arc::new(PostgresNotificationLog::new(pool)),
        ));
    }
    let submit_handler = Arc::new(
        SubmitBookingHandler::new(validator, store, notifier)
            .with_store_timeout(config.booking.store_timeout()),
    );

    let settings = HttpSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = app_router(BookingAppState::new(engine, submit_handler), &settings);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, utc_offset = %zone, "Listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_store(config: &AppConfig, pool: Option<PgPool>) -> Arc<dyn BookingStore> {
    if let Some(pool) = pool {
        tracing::info!("Using PostgreSQL booking store");
        return Arc::new(PostgresBookingStore::new(pool));
    }

    if let Some(store) = &config.store {
        let mut remote = RemoteStoreConfig::new(store.url.clone()).with_timeout(config.booking.store_timeout());
        if let Some(key) = &store.service_key {
            remote = remote.with_service_key(key.clone());
        }
        tracing::info!(url = %store.url, "Using remote booking store");
        return Arc::new(RemoteBookingStore::new(remote));
    }

    tracing::warn!("No booking store configured; bookings are kept in memory");
    Arc::new(InMemoryBookingStore::new())
}

fn build_notifier(config: &NotificationConfig) -> Arc<dyn BookingNotifier> {
    match config.mode {
        NotificationMode::Log => Arc::new(LoggingNotifier::new(EmailIdentity {
            team_email: config.team_email.clone(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })),
        NotificationMode::Webhook => {
            // validate() guarantees the URL in webhook mode
            let url = config.webhook_url.clone().unwrap_or_default();
            let mut webhook = WebhookConfig::new(url).with_timeout(config.timeout());
            if let Some(secret) = &config.signing_secret {
                webhook = webhook.with_signing_secret(secret.clone());
            }
            Arc::new(WebhookNotifier::new(webhook))
        }
        NotificationMode::Disabled => Arc::new(DisabledNotifier),
    }
}
