use std::sync::Arc;

use axum::{
    extract::State,
    response::{Redirect, Response},
};

use crate::{
    app::{models::api_error::ApiError, structs::form_from_request::FormFromRequest},
    sessions::structs::session::Session,
    AppState,
};

use super::{dtos::generate_image_dto::GenerateImageDto, service};

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormFromRequest(dto): FormFromRequest<GenerateImageDto>,
) -> Result<Response, ApiError> {
    service::submit_generation(&state.sessions, &session.id, &dto, state.replicate.as_ref())
        .await?;

    Ok(session.respond(Redirect::to("/")))
}
