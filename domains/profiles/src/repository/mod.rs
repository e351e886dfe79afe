//! Repository implementations for Profiles domain

pub mod memory;
pub mod profiles;

use crate::domain::entities::{DoctorProfile, MemberProfile, ProfileSource};
use carebridge_common::Result;

pub use memory::InMemoryProfileDirectory;
pub use profiles::ProfileRepository;

/// Read access to doctor and patient profiles
#[async_trait::async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Profiles in `source` whose id is in `ids`; unknown ids are skipped
    async fn find_members(
        &self,
        source: ProfileSource,
        ids: &[String],
    ) -> Result<Vec<MemberProfile>>;

    /// Full doctor profile by id
    async fn find_doctor(&self, id: &str) -> Result<Option<DoctorProfile>>;
}
