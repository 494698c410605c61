pub mod download_link;
pub mod generation_result;
