//! Conversations domain: two-member chat threads, member enrichment

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Conversation, ConversationMember, EnrichedConversation, MemberPair};

// Re-export repository types
pub use repository::{ConversationRepository, ConversationStore, InMemoryConversationStore};

// Re-export service and API types
pub use api::routes;
pub use api::ConversationsState;
pub use service::ConversationService;
