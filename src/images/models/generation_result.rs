/// A finished generation: the prompt that produced it and where the image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub prompt: String,
    pub image_url: String,
}

impl GenerationResult {
    pub fn new(prompt: &str, image_url: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            image_url: image_url.to_string(),
        }
    }
}
