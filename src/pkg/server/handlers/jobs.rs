use std::sync::Arc;

use axum::{
    Extension, Form, Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::spec::JobDraft,
            auth::{AdminSession, Notice},
            browser::BrowserPage,
        },
        server::{handlers::ui::BrowseQuery, state::AppState},
    },
    prelude::{BoardError, Result},
};

#[derive(Deserialize)]
pub struct JobForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub apply_url: String,
}

impl From<JobForm> for JobDraft {
    fn from(form: JobForm) -> Self {
        JobDraft {
            title: form.title,
            location: form.location,
            category: form.category,
            description: form.description,
            apply_url: form.apply_url,
        }
        .trimmed()
    }
}

fn failure(e: &BoardError) -> Notice {
    match e {
        BoardError::Validation(fields) => {
            Notice::error(format!("יש להשלים או לתקן את השדות: {}", fields.join(", ")))
        }
        other => Notice::error(format!("הפעולה נכשלה: {}", other)),
    }
}

/// Creates or updates, depending on whether a job was picked for editing.
pub async fn submit(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    Form(input): Form<JobForm>,
) -> Redirect {
    let mut editor = session.editor.lock().await;
    editor.set_draft(input.into());
    let updating = editor.is_editing();
    let result = {
        let mut board = state.board.lock().await;
        editor.submit(&mut board).await
    };
    drop(editor);
    let notice = match result {
        Ok(job) if updating => Notice::success(format!("המשרה \"{}\" עודכנה", job.title)),
        Ok(job) => Notice::success(format!("המשרה \"{}\" נוספה", job.title)),
        Err(e) => failure(&e),
    };
    session.notify(notice).await;
    Redirect::to("/admin")
}

pub async fn edit(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    Path(id): Path<Uuid>,
) -> Redirect {
    let job = state.board.lock().await.get(id).cloned();
    match job {
        Some(job) => session.editor.lock().await.select(&job),
        None => session.notify(failure(&BoardError::JobNotFound(id))).await,
    }
    Redirect::to("/admin")
}

pub async fn cancel(Extension(session): Extension<Arc<AdminSession>>) -> Redirect {
    session.editor.lock().await.cancel();
    Redirect::to("/admin")
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    Path(id): Path<Uuid>,
) -> Redirect {
    let result = state.board.lock().await.delete(id).await;
    let notice = match result {
        Ok(()) => {
            let mut editor = session.editor.lock().await;
            if editor.target() == Some(id) {
                editor.cancel();
            }
            Notice::success("המשרה נמחקה")
        }
        Err(e) => failure(&e),
    };
    session.notify(notice).await;
    Redirect::to("/admin")
}

/// JSON rendition of the public listing.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<BrowserPage>> {
    let browser = query.browser();
    let mut board = state.board.lock().await;
    let _ = board.load().await;
    Ok(Json(browser.view(board.jobs(), state.page_size)?))
}
