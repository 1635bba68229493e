use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::jobs::spec::{Job, JobDraft},
        gateway::JobGateway,
        listing,
    },
    prelude::Result,
};

/// In-memory mirror of the `jobs` table. Local state only changes after the
/// gateway acknowledges a write, and then always to the record the gateway
/// returned.
pub struct JobBoard {
    jobs: Vec<Job>,
    gateway: Arc<dyn JobGateway>,
}

impl JobBoard {
    pub fn new(gateway: Arc<dyn JobGateway>) -> Self {
        JobBoard {
            jobs: Vec::new(),
            gateway,
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Replaces the collection with the backend's, newest first. On failure the
    /// previous collection stays in place.
    pub async fn load(&mut self) -> Result<usize> {
        match self.gateway.list().await {
            Ok(jobs) => {
                tracing::debug!("loaded {} jobs", jobs.len());
                self.jobs = jobs;
                Ok(self.jobs.len())
            }
            Err(e) => {
                tracing::warn!("could not load jobs, keeping {} cached: {}", self.jobs.len(), &e);
                Err(e)
            }
        }
    }

    pub async fn create(&mut self, draft: &JobDraft) -> Result<Job> {
        let draft = draft.trimmed();
        draft.check()?;
        let job = self.gateway.insert(&draft).await.inspect_err(|e| {
            tracing::warn!("error adding job: {}", e);
        })?;
        tracing::info!("created job {} ({})", &job.id, &job.title);
        self.jobs.insert(0, job.clone());
        Ok(job)
    }

    pub async fn update(&mut self, id: Uuid, draft: &JobDraft) -> Result<Job> {
        let draft = draft.trimmed();
        draft.check()?;
        let job = self
            .gateway
            .update(id, &draft, Utc::now())
            .await
            .inspect_err(|e| {
                tracing::warn!("error updating job {}: {}", id, e);
            })?;
        match self.jobs.iter_mut().find(|j| j.id == id) {
            Some(slot) => *slot = job.clone(),
            None => tracing::debug!("updated job {} is not cached locally", id),
        }
        tracing::info!("updated job {}", id);
        Ok(job)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        self.gateway.delete(id).await.inspect_err(|e| {
            tracing::warn!("error deleting job {}: {}", id, e);
        })?;
        self.jobs.retain(|j| j.id != id);
        tracing::info!("deleted job {}", id);
        Ok(())
    }

    pub fn filter(&self, search: &str, location: &str) -> Vec<&Job> {
        listing::filter(&self.jobs, search, location)
    }
}
