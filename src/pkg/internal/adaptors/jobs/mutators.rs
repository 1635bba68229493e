use chrono::{DateTime, Utc};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::jobs::spec::{Job, JobDraft};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobMutator { conn }
    }

    pub async fn create(&mut self, job: &JobDraft) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (title, location, category, description, apply_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, location, category, description, apply_url, created_at, updated_at
            "#,
        )
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.category)
        .bind(&job.description)
        .bind(&job.apply_url)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(row)
    }

    /// Full-record update. `updated_at` never moves behind `created_at`.
    pub async fn update(
        &mut self,
        id: Uuid,
        job: &JobDraft,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET title = $2, location = $3, category = $4, description = $5, apply_url = $6,
                updated_at = GREATEST($7, created_at)
            WHERE id = $1
            RETURNING id, title, location, category, description, apply_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.category)
        .bind(&job.description)
        .bind(&job.apply_url)
        .bind(updated_at)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
