use uuid::Uuid;

use crate::{
    pkg::internal::{
        adaptors::jobs::spec::{Job, JobDraft},
        board::JobBoard,
    },
    prelude::Result,
};

/// The admin job form: one draft, optionally bound to an existing job.
#[derive(Debug, Default, Clone)]
pub struct AdminEditor {
    draft: JobDraft,
    target: Option<Uuid>,
}

impl AdminEditor {
    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn target(&self) -> Option<Uuid> {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    pub fn select(&mut self, job: &Job) {
        self.draft = job.to_draft();
        self.target = Some(job.id);
    }

    pub fn set_draft(&mut self, draft: JobDraft) {
        self.draft = draft;
    }

    pub fn cancel(&mut self) {
        self.draft = JobDraft::default();
        self.target = None;
    }

    /// Creates or updates depending on the edit target. The form is cleared
    /// only when the board accepted the write.
    pub async fn submit(&mut self, board: &mut JobBoard) -> Result<Job> {
        let job = match self.target {
            None => board.create(&self.draft).await?,
            Some(id) => board.update(id, &self.draft).await?,
        };
        self.cancel();
        Ok(job)
    }
}
