//! Doctor details page handler

use axum::{extract::State, http::StatusCode, response::Html};
use carebridge_common::{Result, ValidatedPath, ValidatedQuery};
use carebridge_views::{doctor_details, Viewer};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::ProfilesState;

/// Query params for the doctor details page
#[derive(Debug, Deserialize, Validate)]
pub struct DoctorDetailsQuery {
    /// Whether the viewer holds a premium plan
    #[serde(default)]
    pub premium: bool,
}

/// Render the doctor details page; unknown doctors get the fallback page with 404
pub async fn get_doctor_details(
    State(state): State<ProfilesState>,
    ValidatedPath(id): ValidatedPath<String>,
    ValidatedQuery(query): ValidatedQuery<DoctorDetailsQuery>,
) -> Result<(StatusCode, Html<String>)> {
    let viewer = Viewer {
        premium: query.premium,
    };

    let view = state.service.doctor_details(&id).await?;
    let status = if view.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    Ok((status, Html(doctor_details(view.as_ref(), viewer))))
}
