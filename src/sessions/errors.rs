use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SessionsApiError {
    SessionNotFound,
}

impl SessionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SessionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Session not found. Reload the page to start a new one.".to_string(),
            },
        }
    }
}
