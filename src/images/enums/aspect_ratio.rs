use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub fn all() -> [Self; 3] {
        [Self::Square, Self::Landscape, Self::Portrait]
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Square => "1:1",
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
        }
    }

    pub fn glyph(&self) -> &str {
        match *self {
            Self::Square => "□",
            Self::Landscape => "▭",
            Self::Portrait => "▯",
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.value(), self.glyph())
    }
}
