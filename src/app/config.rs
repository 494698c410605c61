pub const APP_NAME: &str = "Flux Schnell Image Generator";
pub const APP_TAGLINE: &str = "Generate amazing images using the Flux Schnell model";

pub const SESSION_COOKIE: &str = "flux_studio_session";

pub const GALLERY_SIZE: usize = 5;
pub const GALLERY_COLUMNS: usize = 5;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 86400;

// form bodies are a prompt and three options
pub const MAX_BODY_BYTES: usize = 64 * 1024;
pub const RATE_LIMIT_PER_SEC: u64 = 20;
