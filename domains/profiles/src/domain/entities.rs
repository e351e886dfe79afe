//! Domain entities for Profiles domain
//!
//! Doctors and patients live in separate collections. Conversation listings
//! name the collection to resolve members against through [`ProfileSource`].

use serde::{Deserialize, Serialize};
use sqlx::types::Json;

use carebridge_common::{Error, Result};
use carebridge_views::{DoctorDetailsView, OfflineAvailabilityView};

/// Which profile collection a lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    Doctor,
    Patient,
}

impl ProfileSource {
    /// Table holding profiles for this source
    pub fn table(&self) -> &'static str {
        match self {
            ProfileSource::Doctor => "doctors",
            ProfileSource::Patient => "patients",
        }
    }
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::Doctor => write!(f, "doctor"),
            ProfileSource::Patient => write!(f, "patient"),
        }
    }
}

impl std::str::FromStr for ProfileSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doctor" | "doctors" => Ok(ProfileSource::Doctor),
            "patient" | "patients" | "user" | "users" => Ok(ProfileSource::Patient),
            _ => Err(Error::InvalidArgument(format!(
                "Unknown profile source: {}",
                s
            ))),
        }
    }
}

/// Minimal profile used to enrich conversation members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberProfile {
    pub id: String,
    pub name: String,
    /// Stored file reference, signed on read
    pub avatar_key: Option<String>,
}

/// In-person clinic details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineAvailability {
    pub clinic_name: String,
    pub address: String,
    pub timings: String,
}

/// Doctor profile entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DoctorProfile {
    pub id: String,
    pub name: String,
    pub avatar_key: Option<String>,
    pub specialization: String,
    pub experience_years: i32,
    pub consultation_fee: i32,
    pub about: Option<String>,
    pub offline_availability: Option<Json<OfflineAvailability>>,
}

impl DoctorProfile {
    /// Member projection of this doctor
    pub fn member(&self) -> MemberProfile {
        MemberProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar_key: self.avatar_key.clone(),
        }
    }

    /// Build the page view model; `avatar_url` is the already-signed avatar
    pub fn into_view(self, avatar_url: Option<String>) -> DoctorDetailsView {
        DoctorDetailsView {
            id: self.id,
            name: self.name,
            avatar_url,
            specialization: self.specialization,
            experience_years: self.experience_years,
            consultation_fee: self.consultation_fee,
            about: self.about,
            offline_availability: self.offline_availability.map(|Json(o)| {
                OfflineAvailabilityView {
                    clinic_name: o.clinic_name,
                    address: o.address,
                    timings: o.timings,
                }
            }),
        }
    }
}
