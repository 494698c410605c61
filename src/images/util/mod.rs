pub mod download_link;
