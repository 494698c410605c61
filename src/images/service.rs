use axum::http::StatusCode;
use serde_json::Value;
use validator::Validate;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError},
    replicate::{
        config::FLUX_SCHNELL, models::input_spec_flux_schnell::InputSpecFluxSchnell, ReplicateApi,
    },
    sessions::{
        enums::{notice_level::NoticeLevel, notice_target::NoticeTarget},
        models::{credential::Credential, session_state::SessionState},
        store::SessionStore,
    },
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generation_result::GenerationResult,
};

/// Handles a press of "Generate Image": keeps the submitted values as the
/// form draft, then either records a new result or leaves a notice. The
/// session lock is not held while the model runs.
pub async fn submit_generation(
    sessions: &SessionStore,
    session_id: &str,
    dto: &GenerateImageDto,
    replicate: &dyn ReplicateApi,
) -> Result<(), ApiError> {
    let submission = sessions
        .update(session_id, |session| prepare_generation(session, dto))
        .await?;

    let Some((dto, api_token)) = submission else {
        return Ok(());
    };

    let outcome = generate_image(&dto, &api_token, replicate).await;

    sessions
        .update(session_id, |session| record_generation(session, outcome))
        .await
}

/// Stores the draft and validates it against the session's credential.
/// A rejected submission leaves a notice and yields nothing to run.
pub fn prepare_generation(
    session: &mut SessionState,
    dto: &GenerateImageDto,
) -> Option<(GenerateImageDto, String)> {
    session.draft = dto.clone();

    match validate_submission(dto, &session.credential) {
        Ok(submission) => Some(submission),
        Err(e) => {
            session.notify(NoticeTarget::Main, NoticeLevel::Error, &e.message);
            None
        }
    }
}

pub fn record_generation(session: &mut SessionState, outcome: Result<GenerationResult, ApiError>) {
    match outcome {
        Ok(result) => {
            tracing::info!("session {} generated {}", session.id, result.image_url);
            session.record_result(result);
        }
        Err(e) => {
            tracing::error!("Error details: {}", e.message);
            session.notify(
                NoticeTarget::Main,
                NoticeLevel::Error,
                &format!("An error occurred: {}", e.message),
            );
        }
    }
}

/// Checks a submission in the order the form reports problems: prompt,
/// credential, then options. Returns the sanitized request and the token.
pub fn validate_submission(
    dto: &GenerateImageDto,
    credential: &Credential,
) -> Result<(GenerateImageDto, String), ApiError> {
    let dto = dto.sanitized();

    if dto.prompt.is_empty() {
        return Err(ImagesApiError::PromptRequired.value());
    }

    let Some(api_token) = credential.verified_token() else {
        return Err(ImagesApiError::CredentialNotVerified.value());
    };

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    Ok((dto, api_token.to_string()))
}

pub async fn generate_image(
    dto: &GenerateImageDto,
    api_token: &str,
    replicate: &dyn ReplicateApi,
) -> Result<GenerationResult, ApiError> {
    let input = match serde_json::to_value(InputSpecFluxSchnell {
        prompt: dto.prompt.to_string(),
        aspect_ratio: dto.aspect_ratio.value().to_string(),
        output_format: dto.output_format.value().to_string(),
        output_quality: dto.output_quality,
    }) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("generate_image: {:?}", e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let output = replicate
        .run(api_token, FLUX_SCHNELL, input)
        .await
        .and_then(|output| match first_image_url(&output) {
            Some(image_url) => Ok(image_url),
            None => {
                tracing::warn!("generate_image: unusable output {}", output);
                Err(ImagesApiError::NoImageReturned.value())
            }
        });

    match output {
        Ok(image_url) => Ok(GenerationResult::new(&dto.prompt, &image_url)),
        Err(e) => {
            tracing::error!("Image generation failed: {}", e.message);
            Err(ApiError {
                code: e.code,
                message: format!("Image generation failed: {}", e.message),
            })
        }
    }
}

/// A list output yields its first element; anything else is taken as is.
pub fn first_image_url(output: &Value) -> Option<String> {
    let value = match output {
        Value::Array(items) => items.first()?,
        other => other,
    };

    match value {
        Value::String(url) if !url.trim().is_empty() => Some(url.to_string()),
        _ => None,
    }
}
