use crate::page::models::page_view::ShownImage;

use super::output_panel::shown_image_template;

pub fn expanded_image_template(expanded: Option<&ShownImage>) -> String {
    match expanded {
        Some(shown) => format!(
            "<section><h2>Expanded Image</h2>{}</section>",
            shown_image_template(shown)
        ),
        None => String::new(),
    }
}
