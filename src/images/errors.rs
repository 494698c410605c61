use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    PromptRequired,
    CredentialNotVerified,
    NoImageReturned,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PromptRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please enter a prompt.".to_string(),
            },
            Self::CredentialNotVerified => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Please verify your API key in the sidebar before generating an image."
                    .to_string(),
            },
            Self::NoImageReturned => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Replicate returned no image.".to_string(),
            },
        }
    }
}
