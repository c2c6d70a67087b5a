//! In-memory adapters for development and tests.

mod booking_store;
mod notification_log;

pub use booking_store::InMemoryBookingStore;
pub use notification_log::InMemoryNotificationLog;
