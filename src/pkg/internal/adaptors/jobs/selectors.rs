use sqlx::PgConnection;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::jobs::spec::Job, prelude::Result};

pub struct JobSelector<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        JobSelector { conn }
    }

    pub async fn get_by_id(&mut self, id: Uuid) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(
            "SELECT id, title, location, category, description, apply_url, created_at, updated_at
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<Job>> {
        let rows = sqlx::query_as::<_, Job>(
            "SELECT id, title, location, category, description, apply_url, created_at, updated_at
             FROM jobs ORDER BY created_at DESC",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows)
    }
}
