//! Notifications domain: per-user notification feed, pagination, read tracking

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{NewNotification, Notification, NotificationType};
pub use domain::pagination::{NotificationPage, PageRequest};

// Re-export repository types
pub use repository::{InMemoryNotificationStore, NotificationRepository, NotificationStore};

// Re-export service and API types
pub use api::routes;
pub use api::NotificationsState;
pub use service::NotificationService;
