use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GalleryApiError {
    ImageNotFound,
}

impl GalleryApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ImageNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Image not found.".to_string(),
            },
        }
    }
}
