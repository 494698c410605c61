use crate::{
    gallery::models::gallery_entry::GalleryEntry,
    images::{
        dtos::generate_image_dto::GenerateImageDto,
        models::{download_link::DownloadLink, generation_result::GenerationResult},
    },
    sessions::models::notice::Notice,
};

#[derive(Debug, Clone)]
pub struct ShownImage {
    pub result: GenerationResult,
    pub download: DownloadLink,
}

/// Everything the page template needs, computed from one session snapshot.
#[derive(Debug, Clone)]
pub struct PageView {
    pub sidebar_notices: Vec<Notice>,
    pub credential_status: Notice,
    pub main_notices: Vec<Notice>,
    pub draft: GenerateImageDto,
    pub current: Option<ShownImage>,
    pub gallery: Vec<GalleryEntry>,
    pub expanded: Option<ShownImage>,
}
