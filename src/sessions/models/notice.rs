use crate::sessions::enums::{notice_level::NoticeLevel, notice_target::NoticeTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub target: NoticeTarget,
    pub level: NoticeLevel,
    pub message: String,
}
