//! Route definitions for Notifications domain API

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::notifications;
use super::middleware::NotificationsState;

/// Create all Notifications domain API routes
pub fn routes() -> Router<NotificationsState> {
    Router::new()
        .route(
            "/v1/notifications",
            get(notifications::list_all_notifications).post(notifications::create_notification),
        )
        .route(
            "/v1/notifications/new",
            get(notifications::list_new_notifications),
        )
        .route(
            "/v1/notifications/read-all",
            patch(notifications::read_all_notifications),
        )
}
