//! Conversations domain state

use crate::service::ConversationService;
use std::sync::Arc;

/// Application state for the Conversations domain
#[derive(Clone)]
pub struct ConversationsState {
    pub service: Arc<ConversationService>,
}
