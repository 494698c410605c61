use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, StatusCode};

use crate::app::models::api_error::ApiError;

pub struct FetchedBytes {
    pub status: StatusCode,
    pub data: Bytes,
    pub content_type: Option<String>,
}

pub async fn get_bytes(url: &str) -> Result<FetchedBytes, ApiError> {
    let res = match reqwest::get(url).await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get url response.".to_string(),
            });
        }
    };

    // the body is kept whatever the status; only transport failures are errors
    let status = res.status();
    if !status.is_success() {
        tracing::warn!("get_bytes: {} returned {}", url, status);
    }

    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match res.bytes().await {
        Ok(data) => Ok(FetchedBytes {
            status,
            data,
            content_type,
        }),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get bytes from response.".to_string(),
            })
        }
    }
}
