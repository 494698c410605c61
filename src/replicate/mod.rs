pub mod config;
pub mod enums;
pub mod models;
pub mod service;
pub mod structs;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use service::ReplicateClient;
pub use traits::ReplicateApi;
