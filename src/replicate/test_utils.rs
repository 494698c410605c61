use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;

use crate::app::models::api_error::ApiError;

use super::{structs::replicate_model_response::ReplicateModelResponse, traits::ReplicateApi};

/// Stand-in for Replicate: accepts one token and answers `run` with a canned
/// output, counting every call it receives.
pub struct FakeReplicate {
    pub accepted_token: String,
    pub output: Result<Value, String>,
    pub last_input: Mutex<Option<Value>>,
    model_calls: AtomicUsize,
    run_calls: AtomicUsize,
}

impl FakeReplicate {
    pub fn new(accepted_token: &str, output: Result<Value, String>) -> Self {
        Self {
            accepted_token: accepted_token.to_string(),
            output,
            last_input: Mutex::new(None),
            model_calls: AtomicUsize::new(0),
            run_calls: AtomicUsize::new(0),
        }
    }

    pub fn model_calls(&self) -> usize {
        self.model_calls.load(Ordering::SeqCst)
    }

    pub fn run_calls(&self) -> usize {
        self.run_calls.load(Ordering::SeqCst)
    }

    fn check_token(&self, api_token: &str) -> Result<(), ApiError> {
        match api_token == self.accepted_token {
            true => Ok(()),
            false => Err(ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid token.".to_string(),
            }),
        }
    }
}

#[async_trait]
impl ReplicateApi for FakeReplicate {
    async fn get_model(
        &self,
        api_token: &str,
        model: &str,
    ) -> Result<ReplicateModelResponse, ApiError> {
        self.model_calls.fetch_add(1, Ordering::SeqCst);
        self.check_token(api_token)?;

        let (owner, name) = model.split_once('/').unwrap_or((model, model));
        Ok(ReplicateModelResponse {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    async fn run(&self, api_token: &str, _model: &str, input: Value) -> Result<Value, ApiError> {
        self.run_calls.fetch_add(1, Ordering::SeqCst);
        self.check_token(api_token)?;
        *self.last_input.lock().unwrap() = Some(input);

        match &self.output {
            Ok(output) => Ok(output.clone()),
            Err(message) => Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: message.to_string(),
            }),
        }
    }
}
