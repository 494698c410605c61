use crate::sessions::models::notice::Notice;

use super::notice::{notice_template, notices_template};

pub fn sidebar_template(notices: &[Notice], status: &Notice) -> String {
    format!(
        "
        <h2>API Key Configuration</h2>
        <form method=\"post\" action=\"/credential/verify\">
            <label for=\"api_key\">Enter your Replicate API key:</label>
            <input id=\"api_key\" name=\"api_key\" type=\"password\" autocomplete=\"off\">
            <button type=\"submit\">Verify API Key</button>
        </form>
        {}
        {}
        ",
        notices_template(notices),
        notice_template(status)
    )
}
