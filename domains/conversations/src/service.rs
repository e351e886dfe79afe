//! Conversation service: pair invariants, find-or-create, enriched listings

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use carebridge_common::{validate_user_id, Error, Result};
use carebridge_profiles::{MemberProfile, ProfileDirectory, ProfileSource};
use carebridge_storage::UrlSigner;

use crate::domain::entities::{
    Conversation, ConversationMember, EnrichedConversation, MemberPair,
};
use crate::repository::ConversationStore;

/// Message for a listing request without owner id or `from`
pub const LIST_ARGUMENTS_REQUIRED: &str = "Doctor ID is required and doc location";

#[derive(Clone)]
pub struct ConversationService {
    store: Arc<dyn ConversationStore>,
    profiles: Arc<dyn ProfileDirectory>,
    signer: Arc<dyn UrlSigner>,
}

impl ConversationService {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        profiles: Arc<dyn ProfileDirectory>,
        signer: Arc<dyn UrlSigner>,
    ) -> Self {
        Self {
            store,
            profiles,
            signer,
        }
    }

    /// Return the conversation for this pair of users, creating it on first use
    pub async fn create_or_get(&self, user_ids: &[String]) -> Result<Conversation> {
        let pair = MemberPair::new(user_ids)?;
        let upserted = self.store.find_or_create(&Conversation::new(&pair)).await?;

        tracing::debug!(
            conversation_id = %upserted.conversation.id,
            created = upserted.created,
            "Resolved conversation for member pair"
        );

        Ok(upserted.conversation)
    }

    /// Every conversation of `owner_id`, newest first, members resolved
    /// against the `from` profile collection
    pub async fn list_for_user(
        &self,
        owner_id: &str,
        from: Option<&str>,
    ) -> Result<Vec<EnrichedConversation>> {
        let from = from.map(str::trim).unwrap_or_default();
        if owner_id.trim().is_empty() || from.is_empty() {
            return Err(Error::InvalidArgument(LIST_ARGUMENTS_REQUIRED.to_string()));
        }
        validate_user_id(owner_id, "Doctor ID")?;
        let source: ProfileSource = from.parse()?;

        let conversations = self.store.list_by_member(owner_id).await?;

        let mut member_ids: Vec<String> = conversations
            .iter()
            .flat_map(|c| c.members.iter().cloned())
            .collect();
        member_ids.sort();
        member_ids.dedup();

        let profiles: HashMap<String, MemberProfile> = self
            .profiles
            .find_members(source, &member_ids)
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let mut enriched = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            let members = self.enrich_members(&conversation.members, &profiles).await?;
            enriched.push(EnrichedConversation::new(conversation, members));
        }

        tracing::debug!(
            owner_id,
            %source,
            count = enriched.len(),
            "Listed conversations"
        );

        Ok(enriched)
    }

    /// Record new activity on a conversation
    pub async fn record_message(&self, id: Uuid, text: &str) -> Result<Conversation> {
        Conversation::validate_last_message(text)?;

        self.store
            .record_message(id, text, Utc::now())
            .await?
            .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))
    }

    /// Both members of a pair are signed concurrently
    async fn enrich_members(
        &self,
        members: &[String],
        profiles: &HashMap<String, MemberProfile>,
    ) -> Result<Vec<ConversationMember>> {
        match members {
            [a, b] => {
                let (a, b) = tokio::try_join!(
                    self.enrich_member(a, profiles),
                    self.enrich_member(b, profiles)
                )?;
                Ok(vec![a, b])
            }
            _ => {
                // Rows written outside the service; resolve what is there
                let mut out = Vec::with_capacity(members.len());
                for id in members {
                    out.push(self.enrich_member(id, profiles).await?);
                }
                Ok(out)
            }
        }
    }

    async fn enrich_member(
        &self,
        id: &str,
        profiles: &HashMap<String, MemberProfile>,
    ) -> Result<ConversationMember> {
        let profile = profiles.get(id);

        let avatar_url = match profile.and_then(|p| p.avatar_key.as_deref()) {
            Some(key) => Some(self.signer.sign(key).await?),
            None => None,
        };

        Ok(ConversationMember {
            id: id.to_string(),
            name: profile.map(|p| p.name.clone()),
            avatar_url,
        })
    }
}
