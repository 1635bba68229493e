use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres, postgres::PgPoolOptions};
use uuid::Uuid;

use super::{ContentGateway, JobGateway};
use crate::{
    conf::settings,
    pkg::internal::adaptors::{
        content::{mutators::ContentMutator, selectors::ContentSelector, spec::SiteContent},
        jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{Job, JobDraft},
        },
    },
    prelude::{BoardError, Result},
};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[derive(Debug, Clone)]
pub struct PgGateway {
    pool: Arc<PgPool>,
}

impl PgGateway {
    pub fn new(pool: Arc<PgPool>) -> Self {
        PgGateway { pool }
    }
}

#[async_trait::async_trait]
impl JobGateway for PgGateway {
    async fn list(&self) -> Result<Vec<Job>> {
        let mut conn = self.pool.acquire().await?;
        JobSelector::new(&mut *conn).get_all().await
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Job>> {
        let mut conn = self.pool.acquire().await?;
        JobSelector::new(&mut *conn).get_by_id(id).await
    }

    async fn insert(&self, draft: &JobDraft) -> Result<Job> {
        let mut conn = self.pool.acquire().await?;
        let job = JobMutator::new(&mut *conn).create(draft).await?;
        tracing::debug!("inserted job {}", &job.id);
        Ok(job)
    }

    async fn update(&self, id: Uuid, draft: &JobDraft, updated_at: DateTime<Utc>) -> Result<Job> {
        let mut conn = self.pool.acquire().await?;
        JobMutator::new(&mut *conn)
            .update(id, draft, updated_at)
            .await?
            .ok_or(BoardError::JobNotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        if JobMutator::new(&mut *conn).delete(id).await? {
            Ok(())
        } else {
            Err(BoardError::JobNotFound(id))
        }
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("select 1").execute(&*self.pool).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ContentGateway for PgGateway {
    async fn fetch(&self) -> Result<Option<SiteContent>> {
        let mut conn = self.pool.acquire().await?;
        ContentSelector::new(&mut *conn).get().await
    }

    async fn upsert(&self, content: &SiteContent) -> Result<SiteContent> {
        let mut conn = self.pool.acquire().await?;
        ContentMutator::new(&mut *conn).upsert(content).await
    }
}
