use crate::{
    app::models::api_error::ApiError,
    replicate::{config::FLUX_SCHNELL, ReplicateApi},
    sessions::{
        enums::{notice_level::NoticeLevel, notice_target::NoticeTarget},
        models::{credential::Credential, notice::Notice, session_state::SessionState},
        store::SessionStore,
    },
};

use super::dtos::verify_credential_dto::VerifyCredentialDto;

/// Handles a press of "Verify API Key". An empty field falls back to the
/// token from the environment. Returns whether the session is now verified.
pub async fn verify_credential(
    sessions: &SessionStore,
    session_id: &str,
    dto: &VerifyCredentialDto,
    default_token: Option<&str>,
    replicate: &dyn ReplicateApi,
) -> Result<bool, ApiError> {
    let verified_token = match candidate_token(dto, default_token) {
        Some(api_token) => match probe(api_token, replicate).await {
            Ok(_) => Some(api_token),
            Err(e) => {
                tracing::warn!("session {} failed verification: {}", session_id, e.message);
                None
            }
        },
        None => None,
    };

    sessions
        .update(session_id, |session| record_verification(session, verified_token))
        .await
}

pub fn candidate_token<'a>(
    dto: &'a VerifyCredentialDto,
    default_token: Option<&'a str>,
) -> Option<&'a str> {
    let submitted = dto.api_key.trim();
    match submitted.is_empty() {
        true => default_token,
        false => Some(submitted),
    }
}

/// Stores the outcome of a probe and queues the sidebar message for it.
pub fn record_verification(session: &mut SessionState, verified_token: Option<&str>) -> bool {
    match verified_token {
        Some(api_token) => {
            session.credential = Credential::verified(api_token);
            session.notify(
                NoticeTarget::Sidebar,
                NoticeLevel::Success,
                "API key verified successfully!",
            );
            true
        }
        None => {
            session.credential = Credential::default();
            session.notify(
                NoticeTarget::Sidebar,
                NoticeLevel::Error,
                "Invalid API key. Please try again.",
            );
            false
        }
    }
}

/// One metadata call for the fixed model; any successful answer means the
/// token is live.
pub async fn probe(api_token: &str, replicate: &dyn ReplicateApi) -> Result<(), ApiError> {
    let model = replicate.get_model(api_token, FLUX_SCHNELL).await?;
    tracing::debug!("probe reached {}/{}", model.owner, model.name);

    Ok(())
}

/// The standing indicator at the bottom of the sidebar.
pub fn credential_status(credential: &Credential, default_token: Option<&str>) -> Notice {
    let (level, message) = if credential.verified_token().is_some() {
        (NoticeLevel::Success, "API key is verified and ready to use.")
    } else if default_token.is_some() {
        (
            NoticeLevel::Info,
            "Using API key from environment variable. You can override it in the sidebar.",
        )
    } else {
        (
            NoticeLevel::Warning,
            "No verified API key. Please enter and verify your API key in the sidebar.",
        )
    };

    Notice {
        target: NoticeTarget::Sidebar,
        level,
        message: message.to_string(),
    }
}
