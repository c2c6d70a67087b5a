//! In-memory notification log.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{NotificationLog, NotificationLogEntry};

/// Append-only list of delivery attempts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationLog {
    entries: Arc<RwLock<Vec<NotificationLogEntry>>>,
}

impl InMemoryNotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<NotificationLogEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl NotificationLog for InMemoryNotificationLog {
    async fn record(&self, entry: &NotificationLogEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry.clone());
        Ok(())
    }
}
