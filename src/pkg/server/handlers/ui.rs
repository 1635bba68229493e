use std::sync::Arc;

use askama::Template;
use axum::{
    Extension,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{auth::AdminSession, browser::PublicBrowser},
        server::{
            state::AppState,
            uispec::{Admin, ContentRow, Home, JobDetail, NotFound},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Default)]
pub struct BrowseQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub location: String,
    pub page: Option<usize>,
    pub job: Option<Uuid>,
}

impl BrowseQuery {
    pub fn browser(&self) -> PublicBrowser {
        let mut browser = PublicBrowser::default();
        browser.set_search(&self.q);
        browser.set_location(&self.location);
        if let Some(page) = self.page {
            browser.set_page(page);
        }
        browser.select(self.job);
        browser
    }
}

pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Html<String>> {
    let browser = query.browser();
    let view = {
        let mut board = state.board.lock().await;
        // stale listing is still served when the reload fails
        let _ = board.load().await;
        browser.view(board.jobs(), state.page_size)?
    };
    let content = state.site_content().await;
    tracing::debug!(
        "listing page {}/{} for q={:?} location={:?}",
        view.page,
        view.total_pages,
        browser.search(),
        browser.location()
    );
    let template = Home {
        content: &content,
        view: &view,
        search: browser.search(),
        location: browser.location(),
    };
    Ok(Html(template.render()?))
}

/// Detail page. Malformed and unknown ids both get the not-found view.
pub async fn job_detail(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let fetched = match raw.parse::<Uuid>() {
        Ok(id) => state.jobs_gateway.fetch(id).await,
        Err(_) => {
            tracing::debug!("malformed job id {:?}", &raw);
            Ok(None)
        }
    };
    let (status, message) = match fetched {
        Ok(Some(job)) => {
            let content = state.site_content().await;
            let template = JobDetail {
                content: &content,
                job: &job,
            };
            return Ok(Html(template.render()?).into_response());
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            "ייתכן שהמשרה הוסרה או שהקישור שגוי.".to_string(),
        ),
        Err(e) => {
            tracing::warn!("could not fetch job {}: {}", &raw, &e);
            (StatusCode::BAD_GATEWAY, "לא ניתן לטעון את המשרה כרגע.".to_string())
        }
    };
    let template = NotFound { message: &message };
    Ok((status, Html(template.render()?)).into_response())
}

#[derive(Deserialize, Default)]
pub struct AdminQuery {
    pub tab: Option<String>,
}

pub async fn admin(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    Query(query): Query<AdminQuery>,
) -> Result<Html<String>> {
    let jobs = {
        let mut board = state.board.lock().await;
        let _ = board.load().await;
        board.jobs().to_vec()
    };
    let content = state.site_content().await;
    let editor = session.editor.lock().await.clone();
    let template = Admin {
        identity: &session.identity,
        content_tab: query.tab.as_deref() == Some("content"),
        notice: session.take_notice().await,
        jobs: &jobs,
        draft: editor.draft(),
        editing: editor.is_editing(),
        rows: ContentRow::rows(&content),
        paragraphs: &content.about_content,
    };
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_page_starts_at_page_one() {
        let query = BrowseQuery {
            q: "recruiter".into(),
            location: "haifa".into(),
            page: None,
            job: None,
        };
        let browser = query.browser();
        assert_eq!(browser.page(), 1);
        assert_eq!(browser.search(), "recruiter");
        assert_eq!(browser.location(), "haifa");
    }

    #[test]
    fn query_page_and_selection_carry_over() {
        let id = Uuid::new_v4();
        let query = BrowseQuery {
            page: Some(3),
            job: Some(id),
            ..Default::default()
        };
        let browser = query.browser();
        assert_eq!(browser.page(), 3);
        assert_eq!(browser.selected(), Some(id));
    }
}
