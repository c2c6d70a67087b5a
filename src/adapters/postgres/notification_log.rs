//! PostgreSQL implementation of NotificationLog.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::DomainError;
use crate::ports::{NotificationLog, NotificationLogEntry};

/// Writes delivery attempts to `booking_notifications`.
pub struct PostgresNotificationLog {
    pool: PgPool,
}

impl PostgresNotificationLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationLog for PostgresNotificationLog {
    async fn record(&self, entry: &NotificationLogEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO booking_notifications (
                id, booking_id, notification_type, recipient_email, sent_at, status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(*entry.booking_id.as_uuid())
        .bind(entry.notification_type)
        .bind(&entry.recipient_email)
        .bind(*entry.sent_at.as_datetime())
        .bind(entry.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to record notification: {}", e)))?;

        Ok(())
    }
}
