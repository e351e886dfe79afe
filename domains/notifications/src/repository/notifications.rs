//! Notification repository

use crate::domain::entities::Notification;
use crate::repository::NotificationStore;
use carebridge_common::{RepositoryError, Result};
use sqlx::PgPool;

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl NotificationStore for NotificationRepository {
    async fn create(&self, n: &Notification) -> Result<Notification> {
        let created = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (
                id, user_id, date, message, is_read,
                mention, link, kind, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, date, message, is_read,
                      mention, link, kind, created_at
            "#,
        )
        .bind(n.id)
        .bind(&n.user_id)
        .bind(n.date)
        .bind(&n.message)
        .bind(n.is_read)
        .bind(&n.mention)
        .bind(&n.link)
        .bind(n.kind)
        .bind(n.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::classify)?;

        Ok(created)
    }

    async fn list_page(&self, user_id: &str, skip: i64, limit: i64) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, user_id, date, message, is_read,
                   mention, link, kind, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY seq ASC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT id, user_id, date, message, is_read,
                   mention, link, kind, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn count_unread(&self, user_id: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND NOT is_read",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND NOT is_read",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
