use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app::{models::api_error::ApiError, util::time};

use super::{errors::SessionsApiError, models::session_state::SessionState, structs::session::Session};

/// In-memory sessions keyed by the id carried in the session cookie.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionState>>,
    idle_secs: u64,
}

impl SessionStore {
    pub fn new(idle_secs: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_secs,
        }
    }

    /// Resolves the caller's session, starting a new one when the cookie is
    /// missing or names a session that no longer exists. Idle sessions are
    /// dropped here rather than by a background task.
    pub async fn resume(&self, cookie_id: Option<&str>) -> Session {
        let mut sessions = self.sessions.write().await;

        let now = time::current_time_in_secs();
        let before = sessions.len();
        sessions.retain(|_, session| now.saturating_sub(session.last_seen_at) <= self.idle_secs);
        if sessions.len() < before {
            tracing::debug!("evicted {} idle session(s)", before - sessions.len());
        }

        if let Some(id) = cookie_id {
            if let Some(session) = sessions.get_mut(id) {
                session.touch();
                return Session {
                    id: id.to_string(),
                    is_new: false,
                };
            }
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(id.to_string(), SessionState::new(&id));
        tracing::debug!("started session {}", id);

        Session { id, is_new: true }
    }

    /// A snapshot for work that must not hold the lock, like network calls.
    /// Changes to the snapshot are never written back.
    pub async fn checkout(&self, id: &str) -> Result<SessionState, ApiError> {
        match self.sessions.read().await.get(id) {
            Some(session) => Ok(session.clone()),
            None => Err(SessionsApiError::SessionNotFound.value()),
        }
    }

    /// Runs `f` against the stored session under the write lock, so
    /// concurrent requests in one session each see the other's changes.
    pub async fn update<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Result<R, ApiError> {
        match self.sessions.write().await.get_mut(id) {
            Some(session) => Ok(f(session)),
            None => Err(SessionsApiError::SessionNotFound.value()),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resume_without_cookie_starts_a_session() {
        let store = SessionStore::new(60);

        let session = store.resume(None).await;
        assert!(session.is_new);
        assert_eq!(store.len().await, 1);
        assert!(store.checkout(&session.id).await.is_ok());
    }

    #[tokio::test]
    async fn resume_with_known_cookie_reuses_the_session() {
        let store = SessionStore::new(60);
        let first = store.resume(None).await;

        let again = store.resume(Some(&first.id)).await;
        assert!(!again.is_new);
        assert_eq!(again.id, first.id);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn resume_with_unknown_cookie_starts_fresh() {
        let store = SessionStore::new(60);

        let session = store.resume(Some("forged")).await;
        assert!(session.is_new);
        assert_ne!(session.id, "forged");
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted_on_resume() {
        let store = SessionStore::new(60);
        let stale = store.resume(None).await;

        store
            .update(&stale.id, |state| state.last_seen_at -= 120)
            .await
            .unwrap();

        let fresh = store.resume(Some(&stale.id)).await;
        assert!(fresh.is_new);
        assert_eq!(store.len().await, 1);
        assert!(store.checkout(&stale.id).await.is_err());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = SessionStore::new(60);
        let a = store.resume(None).await;
        let b = store.resume(None).await;

        store
            .update(&a.id, |state| state.draft.prompt = "only in a".to_string())
            .await
            .unwrap();

        assert_eq!(store.checkout(&a.id).await.unwrap().draft.prompt, "only in a");
        assert_eq!(store.checkout(&b.id).await.unwrap().draft.prompt, "");
    }

    #[tokio::test]
    async fn updates_apply_to_the_stored_session() {
        let store = SessionStore::new(60);
        let session = store.resume(None).await;

        let snapshot = store.checkout(&session.id).await.unwrap();
        store
            .update(&session.id, |state| state.draft.prompt = "first".to_string())
            .await
            .unwrap();
        let prompt = store
            .update(&session.id, |state| state.draft.prompt.to_string())
            .await
            .unwrap();

        assert_eq!(prompt, "first");
        assert_eq!(snapshot.draft.prompt, "");
    }

    #[tokio::test]
    async fn update_of_an_unknown_session_is_not_found() {
        let store = SessionStore::new(60);

        let e = store.update("missing", |_| ()).await.unwrap_err();
        assert_eq!(e.code, axum::http::StatusCode::NOT_FOUND);
    }
}
