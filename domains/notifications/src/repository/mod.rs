//! Repository implementations for Notifications domain

pub mod memory;
pub mod notifications;

use crate::domain::entities::Notification;
use carebridge_common::Result;

pub use memory::InMemoryNotificationStore;
pub use notifications::NotificationRepository;

/// Persistence capability the notification service depends on
#[async_trait::async_trait]
pub trait NotificationStore: Send + Sync {
    /// Insert a notification
    async fn create(&self, notification: &Notification) -> Result<Notification>;

    /// `limit` notifications of `user_id` after skipping `skip`, insertion order
    async fn list_page(&self, user_id: &str, skip: i64, limit: i64) -> Result<Vec<Notification>>;

    /// Every notification of `user_id`, insertion order
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>>;

    /// Number of unread notifications of `user_id`
    async fn count_unread(&self, user_id: &str) -> Result<i64>;

    /// Mark every unread notification of `user_id` read; returns rows changed
    async fn mark_all_read(&self, user_id: &str) -> Result<u64>;
}
