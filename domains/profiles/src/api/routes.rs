//! Route definitions for Profiles domain API

use axum::{routing::get, Router};

use super::handlers::doctors;
use super::middleware::ProfilesState;

/// Create all Profiles domain API routes
pub fn routes() -> Router<ProfilesState> {
    Router::new().route("/v1/doctors/{id}/details", get(doctors::get_doctor_details))
}
