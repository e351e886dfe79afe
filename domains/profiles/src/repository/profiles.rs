//! Profile repository

use crate::domain::entities::{DoctorProfile, MemberProfile, ProfileSource};
use crate::repository::ProfileDirectory;
use carebridge_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProfileDirectory for ProfileRepository {
    async fn find_members(
        &self,
        source: ProfileSource,
        ids: &[String],
    ) -> Result<Vec<MemberProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // Table name comes from a closed enum, never from input
        let sql = format!(
            "SELECT id, name, avatar_key FROM {} WHERE id = ANY($1)",
            source.table()
        );

        let profiles = sqlx::query_as::<_, MemberProfile>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(profiles)
    }

    async fn find_doctor(&self, id: &str) -> Result<Option<DoctorProfile>> {
        let doctor = sqlx::query_as::<_, DoctorProfile>(
            r#"
            SELECT id, name, avatar_key, specialization,
                   experience_years, consultation_fee, about,
                   offline_availability
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(doctor)
    }
}
