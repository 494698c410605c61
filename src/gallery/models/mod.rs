pub mod gallery_entry;
