//! Domain entities for Conversations domain
//!
//! A conversation pairs exactly two users. The pair is identified
//! order-independently through a canonical member key, which the store keeps
//! unique so that find-or-create can be a single upsert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carebridge_common::{validate_user_id, Error, Result};

/// Number of members in every conversation
pub const CONVERSATION_MEMBER_COUNT: usize = 2;

/// Maximum stored last-message preview length (CHECK length <= 5000)
pub const MAX_LAST_MESSAGE_LENGTH: usize = 5000;

/// Separator of the canonical member key; never valid inside a user id
const MEMBER_KEY_SEPARATOR: char = ':';

/// Validated pair of distinct conversation members, in caller order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPair {
    first: String,
    second: String,
}

impl MemberPair {
    /// Validate raw ids: exactly two, well-formed, distinct
    pub fn new(user_ids: &[String]) -> Result<Self> {
        let [first, second] = user_ids else {
            return Err(Error::InvalidArgument(
                "Exactly two ids required".to_string(),
            ));
        };

        validate_user_id(first, "userIds")?;
        validate_user_id(second, "userIds")?;

        if first == second {
            return Err(Error::InvalidArgument(
                "Conversation members must be two different users".to_string(),
            ));
        }

        Ok(Self {
            first: first.clone(),
            second: second.clone(),
        })
    }

    /// Order-independent key: both ids sorted and joined with `:`
    pub fn key(&self) -> String {
        let (lo, hi) = if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        };
        format!("{}{}{}", lo, MEMBER_KEY_SEPARATOR, hi)
    }

    /// Members in the order they were given
    pub fn members(&self) -> Vec<String> {
        vec![self.first.clone(), self.second.clone()]
    }
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub members: Vec<String>,
    pub member_key: String,
    pub last_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation for a validated pair
    pub fn new(pair: &MemberPair) -> Self {
        let now = Utc::now();
        Conversation {
            id: Uuid::new_v4(),
            members: pair.members(),
            member_key: pair.key(),
            last_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` is one of the two members
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    /// Record new activity: set the preview and bump `updated_at`
    pub fn record_message(&mut self, text: &str) -> Result<()> {
        Self::validate_last_message(text)?;
        self.last_message = Some(text.to_string());
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate a last-message preview (CHECK (length(trim(last_message)) > 0))
    pub fn validate_last_message(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "Last message cannot be empty or whitespace-only".to_string(),
            ));
        }
        if text.chars().count() > MAX_LAST_MESSAGE_LENGTH {
            return Err(Error::InvalidArgument(format!(
                "Last message must be at most {} characters",
                MAX_LAST_MESSAGE_LENGTH
            )));
        }
        Ok(())
    }
}

/// A conversation member with display data resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMember {
    pub id: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Conversation as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedConversation {
    pub id: Uuid,
    pub members: Vec<ConversationMember>,
    pub last_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EnrichedConversation {
    pub fn new(conversation: Conversation, members: Vec<ConversationMember>) -> Self {
        Self {
            id: conversation.id,
            members,
            last_message: conversation.last_message,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        }
    }
}
