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

use super::{dtos::verify_credential_dto::VerifyCredentialDto, service};

pub async fn verify_credential(
    State(state): State<Arc<AppState>>,
    session: Session,
    FormFromRequest(dto): FormFromRequest<VerifyCredentialDto>,
) -> Result<Response, ApiError> {
    service::verify_credential(
        &state.sessions,
        &session.id,
        &dto,
        state.envy.default_api_token(),
        state.replicate.as_ref(),
    )
    .await?;

    Ok(session.respond(Redirect::to("/")))
}
