use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::images::enums::{aspect_ratio::AspectRatio, output_format::OutputFormat};

pub const DEFAULT_OUTPUT_QUALITY: u8 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default = "default_output_quality")]
    #[validate(range(min = 1, max = 100, message = "output quality must be between 1 and 100."))]
    pub output_quality: u8,
}

fn default_output_quality() -> u8 {
    DEFAULT_OUTPUT_QUALITY
}

impl Default for GenerateImageDto {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            aspect_ratio: AspectRatio::default(),
            output_format: OutputFormat::default(),
            output_quality: DEFAULT_OUTPUT_QUALITY,
        }
    }
}

impl GenerateImageDto {
    pub fn sanitized(&self) -> Self {
        Self {
            prompt: self.prompt.trim().to_string(),
            ..self.clone()
        }
    }
}
