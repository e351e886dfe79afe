//! Conversation repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::domain::entities::Conversation;
use crate::repository::{ConversationStore, Upserted};
use carebridge_common::Result;

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ConversationStore for ConversationRepository {
    async fn find_or_create(&self, candidate: &Conversation) -> Result<Upserted> {
        // The no-op DO UPDATE makes RETURNING yield the existing row on conflict;
        // xmax = 0 only for a freshly inserted tuple.
        let row = sqlx::query(
            r#"
            INSERT INTO conversations (
                id, members, member_key, last_message,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (member_key) DO UPDATE
                SET member_key = EXCLUDED.member_key
            RETURNING id, members, member_key, last_message,
                      created_at, updated_at,
                      (xmax = 0) AS inserted
            "#,
        )
        .bind(candidate.id)
        .bind(&candidate.members)
        .bind(&candidate.member_key)
        .bind(&candidate.last_message)
        .bind(candidate.created_at)
        .bind(candidate.updated_at)
        .fetch_one(&self.pool)
        .await?;

        let conversation = Conversation::from_row(&row)?;
        let created: bool = row.try_get("inserted")?;

        Ok(Upserted {
            conversation,
            created,
        })
    }

    async fn list_by_member(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let convs = sqlx::query_as::<_, Conversation>(
            r#"
            SELECT id, members, member_key, last_message,
                   created_at, updated_at
            FROM conversations
            WHERE members @> ARRAY[$1]::text[]
            ORDER BY updated_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(convs)
    }

    async fn record_message(
        &self,
        id: Uuid,
        last_message: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<Conversation>> {
        let updated = sqlx::query_as::<_, Conversation>(
            r#"
            UPDATE conversations SET
                last_message = $2,
                updated_at = $3
            WHERE id = $1
            RETURNING id, members, member_key, last_message,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(last_message)
        .bind(at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }
}
