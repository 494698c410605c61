use async_trait::async_trait;
use serde_json::Value;

use crate::app::models::api_error::ApiError;

use super::structs::replicate_model_response::ReplicateModelResponse;

/// The two Replicate operations the app consumes.
#[async_trait]
pub trait ReplicateApi: Send + Sync {
    /// Fetches model metadata. Used as a liveness probe for an api token.
    async fn get_model(&self, api_token: &str, model: &str)
        -> Result<ReplicateModelResponse, ApiError>;

    /// Runs a model to completion and returns its raw `output`.
    async fn run(&self, api_token: &str, model: &str, input: Value) -> Result<Value, ApiError>;
}
