use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Redirect, Response},
};

use crate::{app::models::api_error::ApiError, sessions::structs::session::Session, AppState};

use super::service;

pub async fn reuse_prompt(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(index): Path<usize>,
) -> Result<Response, ApiError> {
    state
        .sessions
        .update(&session.id, |session_state| {
            service::reuse_prompt(session_state, index)
        })
        .await??;

    Ok(session.respond(Redirect::to("/")))
}

pub async fn expand_image(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(index): Path<usize>,
) -> Result<Response, ApiError> {
    state
        .sessions
        .update(&session.id, |session_state| {
            service::expand_image(session_state, index)
        })
        .await??;

    Ok(session.respond(Redirect::to("/")))
}
