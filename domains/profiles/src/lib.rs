//! Profiles domain: doctor and patient profile directory, doctor details page

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{DoctorProfile, MemberProfile, OfflineAvailability, ProfileSource};

// Re-export repository types
pub use repository::{InMemoryProfileDirectory, ProfileDirectory, ProfileRepository};

// Re-export service and API types
pub use api::routes;
pub use api::ProfilesState;
pub use service::ProfileService;
