//! Notification API handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use carebridge_common::{Result, ValidatedJson, ValidatedQuery};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::NotificationsState;
use crate::domain::entities::{NewNotification, Notification, NotificationType};
use crate::domain::pagination::NotificationPage;

/// Query params for the paginated feed
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewNotificationsQuery {
    pub id: Option<String>,
    pub limit: Option<u32>,
    pub notification_set: Option<u32>,
}

/// Query params addressing one user's notifications
#[derive(Debug, Deserialize, Validate)]
pub struct UserQuery {
    pub id: Option<String>,
}

/// Request for creating a notification
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "message must be 1-1000 characters"
    ))]
    pub message: String,

    #[serde(rename = "type")]
    pub kind: Option<NotificationType>,

    pub mention: Option<String>,

    pub link: Option<String>,

    pub date: Option<DateTime<Utc>>,
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        Self {
            user_id: req.user_id,
            message: req.message,
            kind: req.kind,
            mention: req.mention,
            link: req.link,
            date: req.date,
        }
    }
}

/// Notification response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub message: String,
    pub is_read: bool,
    pub mention: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            date: n.date,
            message: n.message,
            is_read: n.is_read,
            mention: n.mention,
            link: n.link,
            kind: n.kind,
            created_at: n.created_at,
        }
    }
}

/// One feed page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPageResponse {
    pub notifications: Vec<NotificationResponse>,
    pub total_pages: i64,
}

impl From<NotificationPage> for NotificationPageResponse {
    fn from(page: NotificationPage) -> Self {
        Self {
            notifications: page.notifications.into_iter().map(Into::into).collect(),
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadAllResponse {
    pub updated: u64,
}

/// Paginated notification feed
pub async fn list_new_notifications(
    State(state): State<NotificationsState>,
    ValidatedQuery(query): ValidatedQuery<NewNotificationsQuery>,
) -> Result<Json<NotificationPageResponse>> {
    let page = state
        .service
        .new_notifications(query.id.as_deref(), query.limit, query.notification_set)
        .await?;
    Ok(Json(page.into()))
}

/// Every notification of a user
pub async fn list_all_notifications(
    State(state): State<NotificationsState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> Result<Json<Vec<NotificationResponse>>> {
    let notifications = state.service.all_notifications(query.id.as_deref()).await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

pub async fn create_notification(
    State(state): State<NotificationsState>,
    ValidatedJson(req): ValidatedJson<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>)> {
    let notification = state.service.create_notification(req.into()).await?;
    Ok((StatusCode::CREATED, Json(notification.into())))
}

/// Mark all of a user's notifications read
pub async fn read_all_notifications(
    State(state): State<NotificationsState>,
    ValidatedQuery(query): ValidatedQuery<UserQuery>,
) -> Result<Json<ReadAllResponse>> {
    let updated = state.service.read_all(query.id.as_deref()).await?;
    Ok(Json(ReadAllResponse { updated }))
}
