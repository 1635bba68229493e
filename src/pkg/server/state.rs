use std::sync::Arc;

use chrono::Duration;
use tokio::sync::Mutex;

use crate::{
    conf::settings,
    pkg::internal::{
        adaptors::content::spec::SiteContent,
        auth::{CredentialVerifier, SessionStore, StaticCredentials},
        board::JobBoard,
        content::SiteContentState,
        gateway::{
            ContentGateway, JobGateway,
            postgres::{PgGateway, db_pool},
        },
    },
    prelude::Result,
};

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Mutex<JobBoard>>,
    pub content: Arc<Mutex<SiteContentState>>,
    pub jobs_gateway: Arc<dyn JobGateway>,
    pub sessions: Arc<SessionStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub page_size: usize,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let gateway = Arc::new(PgGateway::new(Arc::new(db_pool()?)));
        let verifier = Arc::new(StaticCredentials::new(
            &settings.admin_email,
            &settings.admin_password,
        ));
        let mut state = AppState::from_parts(
            gateway.clone(),
            gateway,
            verifier,
            settings.page_size,
        );
        state.sessions = Arc::new(SessionStore::with_ttl(Duration::minutes(
            settings.session_ttl_minutes,
        )));
        state.warm().await;
        Ok(state)
    }

    pub fn from_parts(
        jobs: Arc<dyn JobGateway>,
        content: Arc<dyn ContentGateway>,
        verifier: Arc<dyn CredentialVerifier>,
        page_size: usize,
    ) -> AppState {
        AppState {
            board: Arc::new(Mutex::new(JobBoard::new(jobs.clone()))),
            content: Arc::new(Mutex::new(SiteContentState::new(content))),
            jobs_gateway: jobs,
            sessions: Arc::new(SessionStore::new()),
            verifier,
            page_size,
        }
    }

    /// Current site copy. A placeholder left by a failed fetch is retried
    /// first, so a recovered backend is picked up on the next render.
    pub async fn site_content(&self) -> SiteContent {
        let mut content = self.content.lock().await;
        content.refresh().await;
        content.content().clone()
    }

    /// First fetch of both mirrors. Failures leave the empty board and the
    /// default copy in place.
    pub async fn warm(&self) {
        if let Ok(n) = self.board.lock().await.load().await {
            tracing::info!("job board warmed with {} jobs", n);
        }
        let source = self.content.lock().await.load().await;
        tracing::info!("site content loaded from {:?}", source);
    }
}
