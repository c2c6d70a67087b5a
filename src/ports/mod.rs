//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BookingStore` - Persists accepted bookings, one per email
//! - `BookingNotifier` - Best-effort team and customer notifications
//! - `NotificationLog` - Best-effort record of delivery attempts

mod booking_notifier;
mod booking_store;
mod notification_log;

pub use booking_notifier::{BookingNotifier, NotificationError};
pub use booking_store::{BookingStore, StoreError};
pub use notification_log::{DeliveryStatus, NotificationLog, NotificationLogEntry, BOOKING_CREATED};
