use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::trace::TraceLayer;

use crate::{credentials, gallery, images, page, AppState};

use super::{
    config::{MAX_BODY_BYTES, RATE_LIMIT_PER_SEC},
    controller,
    errors::DefaultApiError,
};

pub fn build(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::controller::get_page))
        .route("/health", get(controller::get_health))
        // credentials
        .route(
            "/credential/verify",
            post(credentials::controller::verify_credential),
        )
        // images
        .route("/images/generate", post(images::controller::generate_image))
        // gallery
        .route(
            "/gallery/:index/reuse",
            post(gallery::controller::reuse_prompt),
        )
        .route(
            "/gallery/:index/expand",
            post(gallery::controller::expand_image),
        )
        // layers
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!("request failed in middleware: {}", err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(
                    RATE_LIMIT_PER_SEC,
                    Duration::from_secs(1),
                )),
        )
        .with_state(state)
}
