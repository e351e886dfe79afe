//! API layer for the Profiles domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ProfilesState;
pub use routes::routes;
