//! Domain entities for Notifications domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carebridge_common::{validate_user_id, Error, Result};

/// Maximum message length (CHECK length <= 1000)
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Maximum link length (varchar(2048))
pub const MAX_LINK_LENGTH: usize = 2048;

/// Maximum mention length (varchar(200))
pub const MAX_MENTION_LENGTH: usize = 200;

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "notification_type", rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum NotificationType {
    Appointment,
    Payment,
    Blog,
    Add,
    NewConnection,
    #[default]
    Common,
    ReportAnalysis,
}

impl NotificationType {
    pub const ALL: [NotificationType; 7] = [
        NotificationType::Appointment,
        NotificationType::Payment,
        NotificationType::Blog,
        NotificationType::Add,
        NotificationType::NewConnection,
        NotificationType::Common,
        NotificationType::ReportAnalysis,
    ];
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Appointment => write!(f, "appointment"),
            NotificationType::Payment => write!(f, "payment"),
            NotificationType::Blog => write!(f, "blog"),
            NotificationType::Add => write!(f, "add"),
            NotificationType::NewConnection => write!(f, "newConnection"),
            NotificationType::Common => write!(f, "common"),
            NotificationType::ReportAnalysis => write!(f, "reportAnalysis"),
        }
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub message: String,
    pub is_read: bool,
    pub mention: Option<String>,
    pub link: Option<String>,
    pub kind: NotificationType,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a notification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewNotification {
    pub user_id: String,
    pub message: String,
    pub kind: Option<NotificationType>,
    pub mention: Option<String>,
    pub link: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl Notification {
    /// Create a new unread notification
    pub fn new(input: NewNotification) -> Result<Self> {
        validate_user_id(&input.user_id, "userId")?;

        if input.message.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "Notification message cannot be empty".to_string(),
            ));
        }
        if input.message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "Notification message must be at most {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        if let Some(ref link) = input.link {
            if link.chars().count() > MAX_LINK_LENGTH {
                return Err(Error::InvalidArgument(format!(
                    "Link must be at most {} characters",
                    MAX_LINK_LENGTH
                )));
            }
        }

        if let Some(ref mention) = input.mention {
            if mention.chars().count() > MAX_MENTION_LENGTH {
                return Err(Error::InvalidArgument(format!(
                    "Mention must be at most {} characters",
                    MAX_MENTION_LENGTH
                )));
            }
        }

        let now = Utc::now();
        Ok(Notification {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            date: input.date.unwrap_or(now),
            message: input.message,
            is_read: false,
            mention: input.mention,
            link: input.link,
            kind: input.kind.unwrap_or_default(),
            created_at: now,
        })
    }
}
