use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Webp,
    Png,
}

impl OutputFormat {
    pub fn all() -> [Self; 2] {
        [Self::Webp, Self::Png]
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Webp => "webp",
            Self::Png => "png",
        }
    }
}
