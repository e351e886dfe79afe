//! In-memory notification store for tests and local development

use std::sync::{Arc, Mutex};

use crate::domain::entities::Notification;
use crate::repository::NotificationStore;
use carebridge_common::{Error, RepositoryError, Result};

/// Notifications kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationStore {
    rows: Arc<Mutex<Vec<Notification>>>,
}

fn poisoned() -> Error {
    Error::Internal("notification store lock poisoned".to_string())
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notifications
    pub fn len(&self) -> usize {
        self.rows.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn create(&self, notification: &Notification) -> Result<Notification> {
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        if rows.iter().any(|n| n.id == notification.id) {
            return Err(RepositoryError::AlreadyExists.into());
        }
        rows.push(notification.clone());
        Ok(notification.clone())
    }

    async fn list_page(&self, user_id: &str, skip: i64, limit: i64) -> Result<Vec<Notification>> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        let skip = usize::try_from(skip.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(rows
            .iter()
            .filter(|n| n.user_id == user_id)
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        Ok(rows
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn count_unread(&self, user_id: &str) -> Result<i64> {
        let rows = self.rows.lock().map_err(|_| poisoned())?;
        let count = rows
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .count();
        Ok(count as i64)
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64> {
        let mut rows = self.rows.lock().map_err(|_| poisoned())?;
        let mut changed = 0;
        for n in rows
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.is_read)
        {
            n.is_read = true;
            changed += 1;
        }
        Ok(changed)
    }
}
