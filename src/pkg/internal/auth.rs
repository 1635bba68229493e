use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::pkg::internal::editor::AdminEditor;

/// Name of the cookie carrying the session marker.
pub const SESSION_COOKIE: &str = "_Host_session";

pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 12 * 60;

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, identity: &str, secret: &str) -> bool;
}

/// A single configured admin account. Stands in for a real identity provider.
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: &str, password: &str) -> Self {
        StaticCredentials {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, identity: &str, secret: &str) -> bool {
        !self.email.is_empty()
            && !self.password.is_empty()
            && identity.trim().to_lowercase() == self.email
            && secret == self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One-shot message shown on the next admin render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Everything that belongs to one logged-in admin. Handed to admin handlers
/// by the authn middleware.
pub struct AdminSession {
    pub id: Uuid,
    pub identity: String,
    pub created_at: DateTime<Utc>,
    pub editor: Mutex<AdminEditor>,
    notice: Mutex<Option<Notice>>,
}

impl AdminSession {
    fn new(identity: &str) -> Self {
        AdminSession {
            id: Uuid::new_v4(),
            identity: identity.trim().to_lowercase(),
            created_at: Utc::now(),
            editor: Mutex::new(AdminEditor::default()),
            notice: Mutex::new(None),
        }
    }

    pub async fn notify(&self, notice: Notice) {
        *self.notice.lock().await = Some(notice);
    }

    pub async fn take_notice(&self) -> Option<Notice> {
        self.notice.lock().await.take()
    }

    fn expired(&self, ttl: Duration) -> bool {
        Utc::now() - self.created_at >= ttl
    }
}

/// Live admin sessions keyed by the cookie marker. Sessions older than the
/// ttl are dropped when looked up, and swept on every login.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<AdminSession>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::with_ttl(Duration::minutes(DEFAULT_SESSION_TTL_MINUTES))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn login(
        &self,
        verifier: &dyn CredentialVerifier,
        identity: &str,
        secret: &str,
    ) -> Option<Arc<AdminSession>> {
        if !verifier.verify(identity, secret) {
            tracing::warn!("rejected login attempt for {}", identity);
            return None;
        }
        let session = Arc::new(AdminSession::new(identity));
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.expired(self.ttl));
        sessions.insert(session.id, session.clone());
        drop(sessions);
        tracing::info!("{} logged in", &session.identity);
        Some(session)
    }

    /// Looks up the session named by a cookie value.
    pub async fn resolve(&self, marker: &str) -> Option<Arc<AdminSession>> {
        let id = marker.parse::<Uuid>().ok()?;
        let session = self.sessions.read().await.get(&id).cloned()?;
        if session.expired(self.ttl) {
            self.sessions.write().await.remove(&id);
            tracing::info!("session of {} expired", &session.identity);
            return None;
        }
        Some(session)
    }

    pub async fn logout(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id);
        if let Some(session) = &removed {
            tracing::info!("{} logged out successfully", &session.identity);
        }
        removed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn verifier() -> StaticCredentials {
        StaticCredentials::new("admin@example.com", "s3cret")
    }

    #[test]
    fn only_the_configured_pair_verifies() {
        let v = verifier();
        assert!(v.verify("admin@example.com", "s3cret"));
        assert!(v.verify(" Admin@Example.com ", "s3cret"));
        assert!(!v.verify("admin@example.com", "S3cret"));
        assert!(!v.verify("other@example.com", "s3cret"));
        assert!(!v.verify("", ""));
    }

    #[test]
    fn blank_configuration_never_verifies() {
        let v = StaticCredentials::new("", "");
        assert!(!v.verify("", ""));
    }

    #[tokio::test]
    #[traced_test]
    async fn login_resolve_logout_cycle() {
        let store = SessionStore::new();
        let session = store
            .login(&verifier(), "admin@example.com", "s3cret")
            .await
            .expect("valid credentials");
        let marker = session.id.to_string();
        assert!(store.resolve(&marker).await.is_some());

        assert!(store.logout(session.id).await);
        assert!(store.resolve(&marker).await.is_none());
        assert!(!store.logout(session.id).await);
    }

    #[tokio::test]
    #[traced_test]
    async fn wrong_credentials_create_no_session() {
        let store = SessionStore::new();
        assert!(store.login(&verifier(), "admin@example.com", "nope").await.is_none());
        assert!(store.sessions.read().await.is_empty());
        assert!(logs_contain("rejected login attempt"));
    }

    #[tokio::test]
    #[traced_test]
    async fn expired_session_is_dropped_on_lookup() {
        let store = SessionStore::with_ttl(Duration::zero());
        let session = store
            .login(&verifier(), "admin@example.com", "s3cret")
            .await
            .expect("valid credentials");
        assert!(store.resolve(&session.id.to_string()).await.is_none());
        assert!(store.sessions.read().await.is_empty());
        assert!(logs_contain("expired"));
    }

    #[tokio::test]
    #[traced_test]
    async fn login_sweeps_expired_sessions() {
        let store = SessionStore::with_ttl(Duration::zero());
        for _ in 0..3 {
            store
                .login(&verifier(), "admin@example.com", "s3cret")
                .await
                .expect("valid credentials");
        }
        assert_eq!(store.sessions.read().await.len(), 1);
    }

    #[tokio::test]
    #[traced_test]
    async fn fresh_session_resolves() {
        let store = SessionStore::new();
        let session = store
            .login(&verifier(), "admin@example.com", "s3cret")
            .await
            .expect("valid credentials");
        assert!(store.resolve(&session.id.to_string()).await.is_some());
    }

    #[tokio::test]
    async fn garbage_marker_resolves_to_nothing() {
        let store = SessionStore::new();
        assert!(store.resolve("not-a-uuid").await.is_none());
        assert!(store.resolve(&Uuid::new_v4().to_string()).await.is_none());
    }

    #[tokio::test]
    async fn notices_are_shown_once() {
        let session = AdminSession::new("admin@example.com");
        session.notify(Notice::error("boom")).await;
        assert_eq!(session.take_notice().await, Some(Notice::error("boom")));
        assert_eq!(session.take_notice().await, None);
    }
}
