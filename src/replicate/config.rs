pub const API_URL: &str = "https://api.replicate.com/v1";

pub const FLUX_SCHNELL: &str = "black-forest-labs/flux-schnell";
