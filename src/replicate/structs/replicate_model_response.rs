use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReplicateModelResponse {
    pub owner: String,
    pub name: String,
}
