//! PostgreSQL implementation of BookingStore.
//!
//! The unique index on `LOWER(email)` makes the duplicate check atomic; a
//! unique violation (SQLSTATE 23505) surfaces as `StoreError::DuplicateEmail`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::booking::{BookingRecord, BookingStatus, BookingType, NewBooking};
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, Timestamp};
use crate::ports::{BookingStore, StoreError};

/// PostgreSQL implementation of the BookingStore port.
pub struct PostgresBookingStore {
    pool: PgPool,
}

impl PostgresBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a booking.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: Option<String>,
    booking_type: String,
    preferred_date: DateTime<Utc>,
    preferred_time: String,
    message: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for BookingRecord {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let booking_type: BookingType = row.booking_type.parse().map_err(|e| {
            DomainError::database(format!("Invalid booking_type: {}", e))
        })?;
        let status: BookingStatus = row.status.parse().map_err(|e| {
            DomainError::database(format!("Invalid status: {}", e))
        })?;

        Ok(BookingRecord {
            id: BookingId::from_uuid(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
            booking_type,
            preferred_at: row.preferred_date,
            preferred_time: row.preferred_time,
            message: row.message,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn map_insert_error(e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DomainError::new(
            ErrorCode::DuplicateEmail,
            "A booking with this email already exists",
        ),
        _ => {
            tracing::error!("Failed to insert booking: {}", e);
            DomainError::database(format!("Failed to insert booking: {}", e))
        }
    }
}

#[async_trait]
impl BookingStore for PostgresBookingStore {
    async fn create(&self, booking: &NewBooking) -> Result<BookingRecord, StoreError> {
        let row: BookingRow = sqlx::query_as(
            r#"
            INSERT INTO bookings (
                id, first_name, last_name, email, phone_number, booking_type,
                preferred_date, preferred_time, message, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, first_name, last_name, email, phone_number, booking_type,
                      preferred_date, preferred_time, message, status, created_at
            "#,
        )
        .bind(*BookingId::new().as_uuid())
        .bind(&booking.first_name)
        .bind(&booking.last_name)
        .bind(booking.email.to_lowercase())
        .bind(&booking.phone_number)
        .bind(booking.booking_type.as_str())
        .bind(booking.preferred_at)
        .bind(&booking.preferred_time)
        .bind(&booking.message)
        .bind(BookingStatus::Pending.as_str())
        .bind(*Timestamp::now().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(BookingRecord::try_from(row)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(booking_type: &str, status: &str) -> BookingRow {
        BookingRow {
            id: Uuid::new_v4(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            phone_number: None,
            booking_type: booking_type.into(),
            preferred_date: Utc::now(),
            preferred_time: "09:00".into(),
            message: None,
            status: status.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn row_converts_to_record() {
        let record = BookingRecord::try_from(row("consultation", "pending")).unwrap();
        assert_eq!(record.booking_type, BookingType::Consultation);
        assert_eq!(record.status, BookingStatus::Pending);
    }

    #[test]
    fn unknown_enum_values_are_database_errors() {
        let err = BookingRecord::try_from(row("meeting", "pending")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);

        let err = BookingRecord::try_from(row("call", "archived")).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn non_database_errors_are_unavailable() {
        let err: StoreError = map_insert_error(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
