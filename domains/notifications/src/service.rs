//! Notification service: feed pagination, full listing, creation, read-all

use std::sync::Arc;

use carebridge_common::{validate_user_id, Error, Result};

use crate::domain::entities::{NewNotification, Notification};
use crate::domain::pagination::{NotificationPage, PageRequest};
use crate::repository::NotificationStore;

/// Message for a page request missing any of its arguments
pub const PAGE_ARGUMENTS_REQUIRED: &str = "User ID, limit and notificationSet are required";

/// Message for a request without a user id
pub const USER_ID_REQUIRED: &str = "User ID is required";

#[derive(Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

/// Trimmed, non-empty, well-formed user id
fn require_user_id<'a>(id: Option<&'a str>, missing: &str) -> Result<&'a str> {
    let id = id.map(str::trim).unwrap_or_default();
    if id.is_empty() {
        return Err(Error::InvalidArgument(missing.to_string()));
    }
    validate_user_id(id, "User ID")?;
    Ok(id)
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// One page of a user's notifications; page count is derived from unread ones
    pub async fn new_notifications(
        &self,
        user_id: Option<&str>,
        limit: Option<u32>,
        notification_set: Option<u32>,
    ) -> Result<NotificationPage> {
        let (Some(limit), Some(set)) = (limit, notification_set) else {
            return Err(Error::InvalidArgument(PAGE_ARGUMENTS_REQUIRED.to_string()));
        };
        let user_id = require_user_id(user_id, PAGE_ARGUMENTS_REQUIRED)?;
        let page = PageRequest::new(limit, set)?;

        let notifications = self
            .store
            .list_page(user_id, page.skip(), page.limit())
            .await?;
        let unread = self.store.count_unread(user_id).await?;

        tracing::debug!(
            user_id,
            limit,
            notification_set = set,
            returned = notifications.len(),
            unread,
            "Listed notification page"
        );

        Ok(NotificationPage {
            notifications,
            total_pages: page.total_pages(unread),
        })
    }

    /// Every notification of a user in insertion order
    pub async fn all_notifications(&self, user_id: Option<&str>) -> Result<Vec<Notification>> {
        let user_id = require_user_id(user_id, USER_ID_REQUIRED)?;
        self.store.list_by_user(user_id).await
    }

    /// Persist a new unread notification
    pub async fn create_notification(&self, input: NewNotification) -> Result<Notification> {
        let notification = Notification::new(input)?;
        let created = self.store.create(&notification).await?;

        tracing::info!(
            notification_id = %created.id,
            user_id = %created.user_id,
            kind = %created.kind,
            "Created notification"
        );

        Ok(created)
    }

    /// Mark every unread notification of a user read; returns how many changed
    pub async fn read_all(&self, user_id: Option<&str>) -> Result<u64> {
        let user_id = require_user_id(user_id, USER_ID_REQUIRED)?;
        let updated = self.store.mark_all_read(user_id).await?;

        tracing::debug!(user_id, updated, "Marked notifications read");

        Ok(updated)
    }
}
