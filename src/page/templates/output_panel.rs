use crate::{app::util::html::escape, page::models::page_view::ShownImage};

pub fn output_panel_template(current: Option<&ShownImage>) -> String {
    let body = match current {
        Some(shown) => shown_image_template(shown),
        None => String::new(),
    };

    format!("<section><h2>Output</h2>{}</section>", body)
}

/// A full-width image with its caption and download link. Shared with the
/// expanded view.
pub fn shown_image_template(shown: &ShownImage) -> String {
    format!(
        "
        <figure>
            <img src=\"{}\" alt=\"{}\">
            <figcaption>Generated Image</figcaption>
        </figure>
        <a href=\"{}\" download=\"{}\"><button type=\"button\">{}</button></a>
        ",
        escape(&shown.result.image_url),
        escape(&shown.result.prompt),
        shown.download.href,
        escape(&shown.download.file_name),
        escape(&shown.download.label)
    )
}
