use crate::{
    app::util::time,
    images::{dtos::generate_image_dto::GenerateImageDto, models::generation_result::GenerationResult},
    sessions::enums::{notice_level::NoticeLevel, notice_target::NoticeTarget},
};

use super::{credential::Credential, notice::Notice};

/// Everything one browser session knows. Handlers mutate it in place
/// through `SessionStore::update`.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: String,
    pub credential: Credential,
    pub current: Option<GenerationResult>,
    pub history: Vec<GenerationResult>,
    pub expanded: Option<GenerationResult>,
    pub draft: GenerateImageDto,
    pub notices: Vec<Notice>,
    pub last_seen_at: u64,
}

impl SessionState {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            credential: Credential::default(),
            current: None,
            history: Vec::new(),
            expanded: None,
            draft: GenerateImageDto::default(),
            notices: Vec::new(),
            last_seen_at: time::current_time_in_secs(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen_at = time::current_time_in_secs();
    }

    pub fn notify(&mut self, target: NoticeTarget, level: NoticeLevel, message: &str) {
        self.notices.push(Notice {
            target,
            level,
            message: message.to_string(),
        });
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Appends a result to the history and makes it the current image.
    pub fn record_result(&mut self, result: GenerationResult) {
        self.current = Some(result.clone());
        self.history.push(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_taken_once() {
        let mut session = SessionState::new("s1");
        session.notify(NoticeTarget::Main, NoticeLevel::Error, "Please enter a prompt.");

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Please enter a prompt.");
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn record_result_sets_current_and_appends() {
        let mut session = SessionState::new("s1");
        session.record_result(GenerationResult::new("a fox", "http://img/1.png"));
        session.record_result(GenerationResult::new("a hare", "http://img/2.png"));

        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0].image_url, "http://img/1.png");
        assert_eq!(session.current.as_ref().map(|r| r.image_url.as_str()), Some("http://img/2.png"));
    }
}
