//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory booking store
//! - `postgres` - PostgreSQL booking store
//! - `remote` - HTTP booking service client
//! - `notify` - Log, webhook and disabled notifiers
//! - `http` - Axum REST API

pub mod http;
pub mod memory;
pub mod notify;
pub mod postgres;
pub mod remote;

pub use memory::InMemoryBookingStore;
pub use notify::{DisabledNotifier, LoggingNotifier, WebhookNotifier};
pub use postgres::PostgresBookingStore;
pub use remote::RemoteBookingStore;
