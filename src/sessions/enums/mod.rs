pub mod notice_level;
pub mod notice_target;
