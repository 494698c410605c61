use axum::http::StatusCode;

use crate::app::{config::APP_NAME, util::html::escape};

pub fn error_template(code: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head><meta charset=\"utf-8\"><title>{} - {}</title></head>
<body style=\"font-family: system-ui, sans-serif; padding: 2rem;\">
    <h1>{}</h1>
    <p>{}</p>
    <p><a href=\"/\">Back to {}</a></p>
</body>
</html>
",
        code.as_u16(),
        APP_NAME,
        code,
        escape(message),
        APP_NAME
    )
}
