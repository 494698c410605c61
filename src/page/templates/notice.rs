use crate::{app::util::html::escape, sessions::models::notice::Notice};

pub fn notice_template(notice: &Notice) -> String {
    format!(
        "<div class=\"notice {}\" role=\"status\">{}</div>",
        notice.level.value(),
        escape(&notice.message)
    )
}

pub fn notices_template(notices: &[Notice]) -> String {
    notices.iter().map(notice_template).collect()
}
