use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpecFluxSchnell {
    pub prompt: String,
    pub aspect_ratio: String,
    pub output_format: String,
    pub output_quality: u8,
}
