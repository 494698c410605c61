use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ReplicatePredictionsResponse {
    pub id: String,
    pub urls: ReplicateUrls,
    pub status: String,
    pub output: Option<Value>,
    pub error: Option<Value>,
    pub metrics: Option<ReplicateMetrics>,
}

#[derive(Debug, Deserialize)]
pub struct ReplicateUrls {
    pub get: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplicateMetrics {
    pub predict_time: Option<f32>,
}
