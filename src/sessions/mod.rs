pub mod enums;
pub mod errors;
pub mod models;
pub mod store;
pub mod structs;
