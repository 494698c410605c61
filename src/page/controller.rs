use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Response},
};

use crate::{app::models::api_error::ApiError, sessions::structs::session::Session, AppState};

use super::{service, templates::render_page};

pub async fn get_page(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, ApiError> {
    let view =
        service::build_page_view(&state.sessions, &session.id, state.envy.default_api_token())
            .await?;

    Ok(session.respond(Html(render_page(&view))))
}
