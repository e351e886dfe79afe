//! Profiles domain state

use crate::service::ProfileService;
use std::sync::Arc;

/// Application state for the Profiles domain
#[derive(Clone)]
pub struct ProfilesState {
    pub service: Arc<ProfileService>,
}
