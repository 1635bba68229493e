use std::sync::Arc;

use axum::{
    Extension, Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::content::spec::{ContentField, SiteContent},
            auth::{AdminSession, Notice},
        },
        server::state::AppState,
    },
    prelude::Result,
};

const CONTENT_TAB: &str = "/admin?tab=content";

#[derive(Deserialize)]
pub struct FieldInput {
    pub field: ContentField,
    #[serde(default)]
    pub value: String,
}

#[derive(Deserialize)]
pub struct ParagraphInput {
    #[serde(default)]
    pub text: String,
}

async fn report(session: &AdminSession, result: Result<()>, ok: &str) {
    let notice = match result {
        Ok(()) => Notice::success(ok),
        Err(e) => Notice::error(format!("שמירת התוכן נכשלה: {}", e)),
    };
    session.notify(notice).await;
}

pub async fn update_field(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    Form(input): Form<FieldInput>,
) -> Redirect {
    let result = state
        .content
        .lock()
        .await
        .set_field(input.field, input.value)
        .await;
    report(&session, result, "התוכן עודכן").await;
    Redirect::to(CONTENT_TAB)
}

pub async fn append_paragraph(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<AdminSession>>,
) -> Redirect {
    state.content.lock().await.append_about_paragraph();
    Redirect::to(CONTENT_TAB)
}

pub async fn edit_paragraph(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    Path(index): Path<usize>,
    Form(input): Form<ParagraphInput>,
) -> Redirect {
    let result = state
        .content
        .lock()
        .await
        .edit_about_paragraph(index, input.text);
    if let Err(e) = result {
        session.notify(Notice::error(e.to_string())).await;
    }
    Redirect::to(CONTENT_TAB)
}

pub async fn save(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
) -> Redirect {
    let result = state.content.lock().await.save().await;
    report(&session, result, "השינויים נשמרו").await;
    Redirect::to(CONTENT_TAB)
}

pub async fn show(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.site_content().await)
}
