pub mod credential;
pub mod notice;
pub mod session_state;
