use crate::images::models::generation_result::GenerationResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// 1-based position in the gallery, most recent first.
    pub position: usize,
    /// Index into the session history; what the action routes address.
    pub index: usize,
    pub column: usize,
    pub result: GenerationResult,
}
