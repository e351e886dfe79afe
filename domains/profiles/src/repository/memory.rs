//! In-memory profile directory for tests and local development

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{DoctorProfile, MemberProfile, ProfileSource};
use crate::repository::ProfileDirectory;
use carebridge_common::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileDirectory {
    doctors: Arc<RwLock<HashMap<String, DoctorProfile>>>,
    patients: Arc<RwLock<HashMap<String, MemberProfile>>>,
}

fn poisoned() -> Error {
    Error::Internal("profile directory lock poisoned".to_string())
}

impl InMemoryProfileDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_doctor(&self, doctor: DoctorProfile) -> Result<()> {
        self.doctors
            .write()
            .map_err(|_| poisoned())?
            .insert(doctor.id.clone(), doctor);
        Ok(())
    }

    pub fn insert_patient(&self, patient: MemberProfile) -> Result<()> {
        self.patients
            .write()
            .map_err(|_| poisoned())?
            .insert(patient.id.clone(), patient);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileDirectory for InMemoryProfileDirectory {
    async fn find_members(
        &self,
        source: ProfileSource,
        ids: &[String],
    ) -> Result<Vec<MemberProfile>> {
        let profiles = match source {
            ProfileSource::Doctor => {
                let doctors = self.doctors.read().map_err(|_| poisoned())?;
                ids.iter()
                    .filter_map(|id| doctors.get(id).map(DoctorProfile::member))
                    .collect()
            }
            ProfileSource::Patient => {
                let patients = self.patients.read().map_err(|_| poisoned())?;
                ids.iter().filter_map(|id| patients.get(id).cloned()).collect()
            }
        };
        Ok(profiles)
    }

    async fn find_doctor(&self, id: &str) -> Result<Option<DoctorProfile>> {
        Ok(self.doctors.read().map_err(|_| poisoned())?.get(id).cloned())
    }
}
