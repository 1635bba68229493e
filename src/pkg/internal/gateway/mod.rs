//! Seams between the in-memory state and the backend that owns the data.
//!
//! [`JobGateway`] and [`ContentGateway`] are the only places the board
//! suspends on I/O. Production uses [`postgres::PgGateway`]; tests swap in the
//! in-memory gateway.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::{
        content::spec::SiteContent,
        jobs::spec::{Job, JobDraft},
    },
    prelude::Result,
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait::async_trait]
pub trait JobGateway: Send + Sync {
    /// All jobs, newest first.
    async fn list(&self) -> Result<Vec<Job>>;

    async fn fetch(&self, id: Uuid) -> Result<Option<Job>>;

    /// Returns the canonical record with backend-assigned id and timestamps.
    async fn insert(&self, draft: &JobDraft) -> Result<Job>;

    /// Full-record update. Fails with `JobNotFound` when `id` is unknown.
    async fn update(&self, id: Uuid, draft: &JobDraft, updated_at: DateTime<Utc>) -> Result<Job>;

    /// Fails with `JobNotFound` when `id` is unknown.
    async fn delete(&self, id: Uuid) -> Result<()>;

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait::async_trait]
pub trait ContentGateway: Send + Sync {
    async fn fetch(&self) -> Result<Option<SiteContent>>;

    async fn upsert(&self, content: &SiteContent) -> Result<SiteContent>;
}
