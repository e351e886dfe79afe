//! Conversation API handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use carebridge_common::{Result, ValidatedJson, ValidatedPath, ValidatedQuery};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ConversationsState;
use crate::domain::entities::{Conversation, EnrichedConversation};

/// Request for creating (or fetching) a conversation
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    /// The two participants; count is enforced by the service
    #[serde(default)]
    pub user_ids: Vec<String>,
}

/// Request for recording conversation activity
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordMessageRequest {
    #[validate(length(min = 1, message = "lastMessage is required"))]
    pub last_message: String,
}

/// Query params for listing conversations
#[derive(Debug, Deserialize, Validate)]
pub struct ListConversationsQuery {
    /// Profile collection to resolve members against
    pub from: Option<String>,
}

/// Conversation response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: Uuid,
    pub members: Vec<String>,
    pub last_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponse {
    fn from(c: Conversation) -> Self {
        Self {
            id: c.id,
            members: c.members,
            last_message: c.last_message,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Create a conversation for two users, or return the existing one
pub async fn create_conversation(
    State(state): State<ConversationsState>,
    ValidatedJson(req): ValidatedJson<CreateConversationRequest>,
) -> Result<(StatusCode, Json<ConversationResponse>)> {
    let conversation = state.service.create_or_get(&req.user_ids).await?;
    Ok((StatusCode::CREATED, Json(conversation.into())))
}

/// List a user's conversations with member display data
pub async fn list_conversations(
    State(state): State<ConversationsState>,
    ValidatedPath(owner_id): ValidatedPath<String>,
    ValidatedQuery(query): ValidatedQuery<ListConversationsQuery>,
) -> Result<Json<Vec<EnrichedConversation>>> {
    let conversations = state
        .service
        .list_for_user(&owner_id, query.from.as_deref())
        .await?;
    Ok(Json(conversations))
}

/// Record the latest message of a conversation
pub async fn record_last_message(
    State(state): State<ConversationsState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(req): ValidatedJson<RecordMessageRequest>,
) -> Result<Json<ConversationResponse>> {
    let conversation = state.service.record_message(id, &req.last_message).await?;
    Ok(Json(conversation.into()))
}
