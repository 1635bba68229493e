use std::sync::Arc;

use askama::Template;
use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    pkg::{
        internal::auth::{AdminSession, SESSION_COOKIE},
        server::{state::AppState, uispec::Login},
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if state.sessions.resolve(cookie.value()).await.is_some() {
            return Ok(Redirect::to("/admin").into_response());
        }
    }
    Ok(Html(Login { email: "", error: None }.render()?).into_response())
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Result<Response> {
    match state
        .sessions
        .login(&*state.verifier, &input.email, &input.password)
        .await
    {
        Some(session) => {
            let replaced = jar
                .get(SESSION_COOKIE)
                .and_then(|c| c.value().parse::<Uuid>().ok());
            if let Some(previous) = replaced {
                state.sessions.logout(previous).await;
            }
            let cookie = Cookie::build((SESSION_COOKIE, session.id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            Ok((jar.add(cookie), Redirect::to("/admin")).into_response())
        }
        None => {
            let template = Login {
                email: &input.email,
                error: Some("פרטי התחברות שגויים"),
            };
            Ok((StatusCode::UNAUTHORIZED, Html(template.render()?)).into_response())
        }
    }
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Arc<AdminSession>>,
    jar: CookieJar,
) -> impl IntoResponse {
    state.sessions.logout(session.id).await;
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to("/login"))
}
