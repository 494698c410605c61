use std::{convert::Infallible, sync::Arc};

use axum::{
    async_trait,
    extract::FromRequestParts,
    headers::{Cookie, HeaderMapExt},
    http::{header::SET_COOKIE, request::Parts, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::{app::config::SESSION_COOKIE, AppState};

/// The caller's session id, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub is_new: bool,
}

impl Session {
    /// Attaches the session cookie when the session was started by this
    /// request. No `Max-Age`, so the browser drops it when its session ends.
    pub fn respond(&self, response: impl IntoResponse) -> Response {
        let mut response = response.into_response();

        if self.is_new {
            let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id);
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::error!("respond: invalid session cookie: {}", e),
            }
        }

        response
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie = parts.headers.typed_get::<Cookie>();
        let cookie_id = cookie.as_ref().and_then(|cookie| cookie.get(SESSION_COOKIE));

        Ok(state.sessions.resume(cookie_id).await)
    }
}
