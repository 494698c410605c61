use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::app::{envy::Envy, models::api_error::ApiError};

use super::{
    enums::replicate_prediction_status::ReplicatePredictionStatus,
    models::input_spec::InputSpec,
    structs::{
        replicate_error_response::ReplicateErrorResponse,
        replicate_model_response::ReplicateModelResponse,
        replicate_predictions_response::ReplicatePredictionsResponse,
    },
    traits::ReplicateApi,
};

#[derive(Clone)]
pub struct ReplicateClient {
    api_url: String,
    poll_interval: Duration,
    client: reqwest::Client,
}

impl ReplicateClient {
    pub fn new(api_url: &str, poll_interval: Duration) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            poll_interval,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_envy(envy: &Envy) -> Self {
        Self::new(
            &envy.api_url(),
            Duration::from_millis(envy.poll_interval_ms()),
        )
    }

    async fn create_prediction(
        &self,
        api_token: &str,
        model: &str,
        input: Value,
    ) -> Result<ReplicatePredictionsResponse, ApiError> {
        let url = format!("{}/models/{}/predictions", self.api_url, model);
        let result = self
            .client
            .post(url)
            .bearer_auth(api_token)
            .header("Prefer", "wait")
            .json(&InputSpec { input })
            .send()
            .await;

        match result {
            Ok(res) => read_json(res, "create_prediction").await,
            Err(e) => {
                tracing::warn!("create_prediction: {:?}", e);
                Err(unreachable_error(&e))
            }
        }
    }

    async fn get_prediction(
        &self,
        url: &str,
        api_token: &str,
    ) -> Result<ReplicatePredictionsResponse, ApiError> {
        let result = self.client.get(url).bearer_auth(api_token).send().await;

        match result {
            Ok(res) => read_json(res, "get_prediction").await,
            Err(e) => {
                tracing::warn!("get_prediction: {:?}", e);
                Err(unreachable_error(&e))
            }
        }
    }
}

#[async_trait]
impl ReplicateApi for ReplicateClient {
    async fn get_model(
        &self,
        api_token: &str,
        model: &str,
    ) -> Result<ReplicateModelResponse, ApiError> {
        let url = format!("{}/models/{}", self.api_url, model);
        let result = self.client.get(url).bearer_auth(api_token).send().await;

        match result {
            Ok(res) => read_json(res, "get_model").await,
            Err(e) => {
                tracing::warn!("get_model: {:?}", e);
                Err(unreachable_error(&e))
            }
        }
    }

    async fn run(&self, api_token: &str, model: &str, input: Value) -> Result<Value, ApiError> {
        let mut prediction = self.create_prediction(api_token, model, input).await?;

        // `Prefer: wait` usually returns a finished prediction; poll until it is
        while !ReplicatePredictionStatus::is_terminal(&prediction.status) {
            tracing::debug!(
                "waiting for prediction {} ({})",
                prediction.id,
                prediction.status
            );
            sleep(self.poll_interval).await;

            prediction = self.get_prediction(&prediction.urls.get, api_token).await?;
        }

        if prediction.status != ReplicatePredictionStatus::Succeeded.value() {
            let reason = match &prediction.error {
                Some(Value::String(error)) => error.to_string(),
                Some(Value::Null) | None => "no error reported".to_string(),
                Some(error) => error.to_string(),
            };

            tracing::error!(
                "prediction {} {}: {}",
                prediction.id,
                prediction.status,
                reason
            );
            return Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("Prediction {}: {}", prediction.status, reason),
            });
        }

        if let Some(metrics) = &prediction.metrics {
            tracing::info!(
                "prediction {} succeeded in {:?}s",
                prediction.id,
                metrics.predict_time
            );
        }

        Ok(prediction.output.unwrap_or(Value::Null))
    }
}

async fn read_json<T: DeserializeOwned>(res: Response, operation: &str) -> Result<T, ApiError> {
    let status = res.status();

    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("{} (1): {:?}", operation, e);
            return Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to read Replicate response.".to_string(),
            });
        }
    };

    if !status.is_success() {
        tracing::warn!("{} (2): {} {:?}", operation, status, text);
        let detail = serde_json::from_str::<ReplicateErrorResponse>(&text)
            .ok()
            .and_then(|error| error.detail.or(error.title))
            .unwrap_or_else(|| format!("Replicate responded with {}.", status));

        return Err(ApiError {
            code: status,
            message: detail,
        });
    }

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!("{} (3): {:?} {:?}", operation, e, text);
            Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Unexpected response from Replicate.".to_string(),
            })
        }
    }
}

fn unreachable_error(e: &reqwest::Error) -> ApiError {
    ApiError {
        code: StatusCode::BAD_GATEWAY,
        message: format!("Failed to reach Replicate: {}", e),
    }
}
