//! Remote HTTP adapters.

mod booking_store;

pub use booking_store::{RemoteBookingStore, RemoteStoreConfig};
