//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresBookingStore` - Booking persistence with a unique email index
//! - `PostgresNotificationLog` - Delivery attempts per booking

mod booking_store;
mod notification_log;

pub use booking_store::PostgresBookingStore;
pub use notification_log::PostgresNotificationLog;
