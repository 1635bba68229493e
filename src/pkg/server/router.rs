use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::auth::{login, login_page, logout};
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::{admin, home, job_detail};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    Ok(routes(state))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/admin", get(admin))
        .route("/admin/jobs", post(handlers::jobs::submit))
        .route("/admin/jobs/cancel", post(handlers::jobs::cancel))
        .route("/admin/jobs/{id}/edit", post(handlers::jobs::edit))
        .route("/admin/jobs/{id}/delete", post(handlers::jobs::delete))
        .route("/admin/content", post(handlers::content::update_field))
        .route("/admin/content/save", post(handlers::content::save))
        .route(
            "/admin/content/paragraphs",
            post(handlers::content::append_paragraph),
        )
        .route(
            "/admin/content/paragraphs/{index}",
            post(handlers::content::edit_paragraph),
        )
        .route("/logout", post(logout))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/", get(home))
        .route("/jobs/{id}", get(job_detail))
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/content", get(handlers::content::show))
        .route("/login", get(login_page).post(login))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::{
        adaptors::{content::spec::SiteContent, jobs::spec::JobDraft},
        auth::StaticCredentials,
        gateway::memory::MemoryGateway,
    };

    const EMAIL: &str = "admin@example.com";
    const PASSWORD: &str = "hunter2";

    fn draft(title: &str, location: &str) -> JobDraft {
        JobDraft {
            title: title.into(),
            location: location.into(),
            category: "הייטק".into(),
            description: "תיאור".into(),
            apply_url: String::new(),
        }
    }

    fn state(gateway: Arc<MemoryGateway>) -> AppState {
        AppState::from_parts(
            gateway.clone(),
            gateway,
            Arc::new(StaticCredentials::new(EMAIL, PASSWORD)),
            5,
        )
    }

    fn app(gateway: Arc<MemoryGateway>) -> Router {
        routes(state(gateway))
    }

    fn get_req(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_req(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(form.to_string())).unwrap()
    }

    async fn body(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    async fn sign_in(app: &Router) -> String {
        sign_in_over(app, None).await
    }

    async fn sign_in_over(app: &Router, cookie: Option<&str>) -> String {
        let form = format!("email={}&password={}", EMAIL, PASSWORD).replace('@', "%40");
        let response = app
            .clone()
            .oneshot(post_req("/login", cookie, &form))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin");
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    #[traced_test]
    async fn admin_without_session_goes_to_login() {
        let app = app(Arc::new(MemoryGateway::new()));
        let response = app.oneshot(get_req("/admin", None)).await.unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    #[traced_test]
    async fn forged_session_marker_is_rejected() {
        let app = app(Arc::new(MemoryGateway::new()));
        let cookie = format!("_Host_session={}", uuid::Uuid::new_v4());
        let response = app
            .oneshot(post_req("/admin/jobs", Some(&cookie), "title=x"))
            .await
            .unwrap();
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    #[traced_test]
    async fn bad_credentials_render_login_error() {
        let app = app(Arc::new(MemoryGateway::new()));
        let response = app
            .oneshot(post_req(
                "/login",
                None,
                "email=admin%40example.com&password=wrong",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body(response).await.contains("login-error"));
    }

    #[tokio::test]
    #[traced_test]
    async fn signed_in_admin_sees_dashboard_until_logout() {
        let app = app(Arc::new(MemoryGateway::new()));
        let cookie = sign_in(&app).await;

        let response = app
            .clone()
            .oneshot(get_req("/admin", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await.contains(EMAIL));

        let response = app
            .clone()
            .oneshot(get_req("/login", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin");

        let response = app
            .clone()
            .oneshot(post_req("/logout", Some(&cookie), ""))
            .await
            .unwrap();
        assert_eq!(location(&response), "/login");

        let response = app.oneshot(get_req("/admin", Some(&cookie))).await.unwrap();
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    #[traced_test]
    async fn admin_creates_job_and_sees_notice() {
        let gateway = Arc::new(MemoryGateway::new());
        let app = app(gateway.clone());
        let cookie = sign_in(&app).await;

        let form = "title=%D7%9E%D7%92%D7%99%D7%99%D7%A1%D7%AA&location=Haifa&category=HR&description=desc";
        let response = app
            .clone()
            .oneshot(post_req("/admin/jobs", Some(&cookie), form))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin");
        let stored = gateway.stored_jobs();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "מגייסת");

        let page = body(
            app.clone()
                .oneshot(get_req("/admin", Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert!(page.contains("id=\"notice\""));
        assert!(page.contains("מגייסת"));

        // the notice is shown once
        let page = body(app.oneshot(get_req("/admin", Some(&cookie))).await.unwrap()).await;
        assert!(!page.contains("id=\"notice\""));
    }

    #[tokio::test]
    #[traced_test]
    async fn incomplete_job_form_is_not_submitted() {
        let gateway = Arc::new(MemoryGateway::new());
        let app = app(gateway.clone());
        let cookie = sign_in(&app).await;
        let calls = gateway.calls();

        let response = app
            .clone()
            .oneshot(post_req("/admin/jobs", Some(&cookie), "title=only"))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin");
        assert_eq!(gateway.calls(), calls);
        assert!(gateway.stored_jobs().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn admin_deletes_job() {
        let gateway = Arc::new(MemoryGateway::new());
        let job = gateway.seed(&draft("Recruiter", "Tel Aviv"));
        let app = app(gateway.clone());
        let cookie = sign_in(&app).await;

        let uri = format!("/admin/jobs/{}/delete", job.id);
        let response = app
            .oneshot(post_req(&uri, Some(&cookie), ""))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin");
        assert!(gateway.stored_jobs().is_empty());
    }

    #[tokio::test]
    #[traced_test]
    async fn admin_updates_content_field() {
        let gateway = Arc::new(MemoryGateway::new());
        let app = app(gateway.clone());
        let cookie = sign_in(&app).await;

        let response = app
            .clone()
            .oneshot(post_req(
                "/admin/content",
                Some(&cookie),
                "field=contact_title&value=Reach%20us",
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin?tab=content");
        let stored = gateway.stored_content().unwrap();
        assert_eq!(stored.contact_title, "Reach us");

        let json = body(app.oneshot(get_req("/api/content", None)).await.unwrap()).await;
        assert!(json.contains("Reach us"));
    }

    #[tokio::test]
    #[traced_test]
    async fn home_lists_newest_jobs_page_by_page() {
        let gateway = Arc::new(MemoryGateway::new());
        for i in 0..7 {
            gateway.seed(&draft(&format!("Job {}", i), "Haifa"));
        }
        let app = app(gateway);

        let first = body(app.clone().oneshot(get_req("/", None)).await.unwrap()).await;
        assert!(first.contains("Job 6"));
        assert!(!first.contains("Job 1"));

        let json = body(
            app.clone()
                .oneshot(get_req("/api/jobs?page=2", None))
                .await
                .unwrap(),
        )
        .await;
        let page: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(page["page"], 2);
        assert_eq!(page["total_pages"], 2);
        assert_eq!(page["jobs"].as_array().unwrap().len(), 2);

        // past the last page the listing clamps
        let json = body(
            app.oneshot(get_req("/api/jobs?page=9", None))
                .await
                .unwrap(),
        )
        .await;
        let page: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(page["page"], 2);
    }

    #[tokio::test]
    #[traced_test]
    async fn api_filters_by_search_and_location() {
        let gateway = Arc::new(MemoryGateway::new());
        gateway.seed(&draft("Recruiter", "Haifa"));
        gateway.seed(&draft("Recruiter", "Tel Aviv"));
        gateway.seed(&draft("Designer", "Haifa"));
        let app = app(gateway);

        let json = body(
            app.oneshot(get_req("/api/jobs?q=recruit&location=Haifa", None))
                .await
                .unwrap(),
        )
        .await;
        let page: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(page["total"], 1);
        assert_eq!(page["jobs"][0]["location"], "Haifa");
    }

    #[tokio::test]
    #[traced_test]
    async fn unknown_job_detail_is_not_found() {
        let app = app(Arc::new(MemoryGateway::new()));
        let uri = format!("/jobs/{}", uuid::Uuid::new_v4());
        let response = app.oneshot(get_req(&uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[traced_test]
    async fn health_reflects_backend() {
        let gateway = Arc::new(MemoryGateway::new());
        let app = app(gateway.clone());
        let response = app.clone().oneshot(get_req("/healthz", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        gateway.fail(true);
        let response = app.clone().oneshot(get_req("/healthz", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let response = app.oneshot(get_req("/livez", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    #[traced_test]
    async fn login_again_replaces_the_previous_session() {
        let app = app(Arc::new(MemoryGateway::new()));
        let first = sign_in(&app).await;
        let second = sign_in_over(&app, Some(&first)).await;
        assert_ne!(first, second);

        let response = app
            .clone()
            .oneshot(get_req("/admin", Some(&first)))
            .await
            .unwrap();
        assert_eq!(location(&response), "/login");

        let response = app.oneshot(get_req("/admin", Some(&second))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    #[traced_test]
    async fn malformed_job_id_gets_the_not_found_view() {
        let app = app(Arc::new(MemoryGateway::new()));
        let response = app.oneshot(get_req("/jobs/not-a-uuid", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let page = body(response).await;
        assert!(page.contains("ייתכן שהמשרה הוסרה"));
    }

    fn custom_content() -> SiteContent {
        let mut content = SiteContent::default();
        content.main_title = "CUSTOM-TITLE".into();
        content
    }

    #[tokio::test]
    #[traced_test]
    async fn content_recovers_after_backend_was_down_at_startup() {
        let gateway = Arc::new(MemoryGateway::with_content(custom_content()));
        let state = state(gateway.clone());
        gateway.fail(true);
        state.warm().await;
        gateway.fail(false);
        let app = routes(state);

        let page = body(app.clone().oneshot(get_req("/", None)).await.unwrap()).await;
        assert!(page.contains("CUSTOM-TITLE"));

        let cookie = sign_in(&app).await;
        let response = app
            .oneshot(post_req(
                "/admin/content",
                Some(&cookie),
                "field=contact_title&value=Reach%20us",
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin?tab=content");
        let stored = gateway.stored_content().unwrap();
        assert_eq!(stored.main_title, "CUSTOM-TITLE");
        assert_eq!(stored.contact_title, "Reach us");
    }

    #[tokio::test]
    #[traced_test]
    async fn content_edit_is_refused_while_backend_is_down() {
        let gateway = Arc::new(MemoryGateway::with_content(custom_content()));
        let state = state(gateway.clone());
        let app = routes(state);
        let cookie = sign_in(&app).await;
        gateway.fail(true);

        let response = app
            .clone()
            .oneshot(post_req(
                "/admin/content",
                Some(&cookie),
                "field=contact_title&value=Reach%20us",
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin?tab=content");
        assert_eq!(gateway.stored_content().unwrap(), custom_content());

        let page = body(
            app.oneshot(get_req("/admin?tab=content", Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert!(page.contains("bg-red-50"));
    }
}
