//! Route definitions for Conversations domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::conversations;
use super::middleware::ConversationsState;

/// Create all Conversations domain API routes
pub fn routes() -> Router<ConversationsState> {
    Router::new()
        .route(
            "/v1/conversations",
            post(conversations::create_conversation),
        )
        .route(
            "/v1/conversations/{id}",
            get(conversations::list_conversations),
        )
        .route(
            "/v1/conversations/{id}/last-message",
            patch(conversations::record_last_message),
        )
}
