//! Notifications domain state

use crate::service::NotificationService;
use std::sync::Arc;

/// Application state for the Notifications domain
#[derive(Clone)]
pub struct NotificationsState {
    pub service: Arc<NotificationService>,
}
