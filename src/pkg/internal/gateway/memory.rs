use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::{ContentGateway, JobGateway};
use crate::{
    pkg::internal::adaptors::{
        content::spec::SiteContent,
        jobs::spec::{Job, JobDraft},
    },
    prelude::{BoardError, Result},
};

/// Backend stand-in for tests. Every call is counted, and `fail` makes every
/// subsequent call return a gateway error until it is cleared.
#[derive(Default)]
pub struct MemoryGateway {
    jobs: Mutex<Vec<Job>>,
    content: Mutex<Option<SiteContent>>,
    clock: Mutex<Option<DateTime<Utc>>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: SiteContent) -> Self {
        let gateway = Self::default();
        *gateway.content.lock().unwrap() = Some(content);
        gateway
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored_jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn stored_content(&self) -> Option<SiteContent> {
        self.content.lock().unwrap().clone()
    }

    /// Inserts straight into the store, bypassing the call counter.
    pub fn seed(&self, draft: &JobDraft) -> Job {
        let job = self.canonical(draft);
        self.jobs.lock().unwrap().insert(0, job.clone());
        job
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(BoardError::Gateway("backend unavailable".into()));
        }
        Ok(())
    }

    /// Strictly increasing timestamps keep newest-first ordering deterministic.
    fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.lock().unwrap();
        let next = match *clock {
            Some(t) => t + Duration::seconds(1),
            None => Utc::now(),
        };
        *clock = Some(next);
        next
    }

    fn canonical(&self, draft: &JobDraft) -> Job {
        let now = self.tick();
        Job {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            location: draft.location.clone(),
            category: draft.category.clone(),
            description: draft.description.clone(),
            apply_url: draft.apply_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait::async_trait]
impl JobGateway for MemoryGateway {
    async fn list(&self) -> Result<Vec<Job>> {
        self.enter()?;
        let mut jobs = self.jobs.lock().unwrap().clone();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Job>> {
        self.enter()?;
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    async fn insert(&self, draft: &JobDraft) -> Result<Job> {
        self.enter()?;
        let job = self.canonical(draft);
        self.jobs.lock().unwrap().insert(0, job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, draft: &JobDraft, updated_at: DateTime<Utc>) -> Result<Job> {
        self.enter()?;
        let mut jobs = self.jobs.lock().unwrap();
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(BoardError::JobNotFound(id))?;
        job.title = draft.title.clone();
        job.location = draft.location.clone();
        job.category = draft.category.clone();
        job.description = draft.description.clone();
        job.apply_url = draft.apply_url.clone();
        job.updated_at = updated_at.max(job.created_at);
        Ok(job.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.enter()?;
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        if jobs.len() == before {
            return Err(BoardError::JobNotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.enter()
    }
}

#[async_trait::async_trait]
impl ContentGateway for MemoryGateway {
    async fn fetch(&self) -> Result<Option<SiteContent>> {
        self.enter()?;
        Ok(self.content.lock().unwrap().clone())
    }

    async fn upsert(&self, content: &SiteContent) -> Result<SiteContent> {
        self.enter()?;
        *self.content.lock().unwrap() = Some(content.clone());
        Ok(content.clone())
    }
}
