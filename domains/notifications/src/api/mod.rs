//! API layer for the Notifications domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::NotificationsState;
pub use routes::routes;
