use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::pkg::{internal::auth::SESSION_COOKIE, server::state::AppState};

/// Resolves the session cookie and hands the session to admin handlers as an
/// extension. Requests without a live session go to the login page before any
/// admin handler runs.
pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(&headers);
    let maybe_cookie = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty());
    if let Some(cookie) = maybe_cookie {
        if let Some(session) = state.sessions.resolve(cookie.value()).await {
            request.extensions_mut().insert(session);
            return next.run(request).await;
        }
        tracing::warn!("stale session marker, authentication denied");
    } else {
        tracing::debug!("session marker missing, authentication denied");
    }
    Redirect::to("/login").into_response()
}
