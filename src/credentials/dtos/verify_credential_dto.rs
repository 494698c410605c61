use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyCredentialDto {
    #[serde(default)]
    pub api_key: String,
}
