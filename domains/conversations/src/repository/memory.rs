//! In-memory conversation store for tests and local development

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::Conversation;
use crate::repository::{ConversationStore, Upserted};
use carebridge_common::{Error, Result};

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<Uuid, Conversation>,
    /// member_key -> id; the unique index
    by_key: HashMap<String, Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    inner: Arc<Mutex<Inner>>,
}

fn poisoned() -> Error {
    Error::Internal("conversation store lock poisoned".to_string())
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored conversations
    pub fn len(&self) -> usize {
        self.inner.lock().map(|i| i.by_id.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn find_or_create(&self, candidate: &Conversation) -> Result<Upserted> {
        // Lookup and insert under one lock, mirroring the unique-key upsert
        let mut inner = self.inner.lock().map_err(|_| poisoned())?;

        if let Some(existing) = inner
            .by_key
            .get(&candidate.member_key)
            .and_then(|id| inner.by_id.get(id))
        {
            return Ok(Upserted {
                conversation: existing.clone(),
                created: false,
            });
        }

        inner
            .by_key
            .insert(candidate.member_key.clone(), candidate.id);
        inner.by_id.insert(candidate.id, candidate.clone());

        Ok(Upserted {
            conversation: candidate.clone(),
            created: true,
        })
    }

    async fn list_by_member(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let inner = self.inner.lock().map_err(|_| poisoned())?;
        let mut convs: Vec<Conversation> = inner
            .by_id
            .values()
            .filter(|c| c.has_member(user_id))
            .cloned()
            .collect();
        convs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(convs)
    }

    async fn record_message(
        &self,
        id: Uuid,
        last_message: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<Conversation>> {
        let mut inner = self.inner.lock().map_err(|_| poisoned())?;
        Ok(inner.by_id.get_mut(&id).map(|conv| {
            conv.last_message = Some(last_message.to_string());
            conv.updated_at = at;
            conv.clone()
        }))
    }
}
