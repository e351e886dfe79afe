//! Repository implementations for Conversations domain

pub mod conversations;
pub mod memory;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::Conversation;
use carebridge_common::Result;

pub use conversations::ConversationRepository;
pub use memory::InMemoryConversationStore;

/// Outcome of a find-or-create call
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted {
    pub conversation: Conversation,
    /// `true` when this call inserted the record
    pub created: bool,
}

/// Persistence capability the conversation service depends on
#[async_trait::async_trait]
pub trait ConversationStore: Send + Sync {
    /// Atomically return the conversation with `candidate.member_key`,
    /// inserting `candidate` when none exists
    async fn find_or_create(&self, candidate: &Conversation) -> Result<Upserted>;

    /// Conversations containing `user_id`, newest `updated_at` first
    async fn list_by_member(&self, user_id: &str) -> Result<Vec<Conversation>>;

    /// Set the last-message preview and `updated_at`
    async fn record_message(
        &self,
        id: Uuid,
        last_message: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<Conversation>>;
}
