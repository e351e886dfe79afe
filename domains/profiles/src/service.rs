//! Profile service: doctor lookups with signed avatars

use std::sync::Arc;

use carebridge_common::{validate_user_id, Result};
use carebridge_storage::UrlSigner;
use carebridge_views::DoctorDetailsView;

use crate::repository::ProfileDirectory;

#[derive(Clone)]
pub struct ProfileService {
    directory: Arc<dyn ProfileDirectory>,
    signer: Arc<dyn UrlSigner>,
}

impl ProfileService {
    pub fn new(directory: Arc<dyn ProfileDirectory>, signer: Arc<dyn UrlSigner>) -> Self {
        Self { directory, signer }
    }

    /// Doctor page view model, or `None` when no such doctor exists
    pub async fn doctor_details(&self, doctor_id: &str) -> Result<Option<DoctorDetailsView>> {
        validate_user_id(doctor_id, "Doctor ID")?;

        let Some(doctor) = self.directory.find_doctor(doctor_id).await? else {
            tracing::debug!(doctor_id, "Doctor not found");
            return Ok(None);
        };

        let avatar_url = match doctor.avatar_key.as_deref() {
            Some(key) => Some(self.signer.sign(key).await?),
            None => None,
        };

        Ok(Some(doctor.into_view(avatar_url)))
    }
}
