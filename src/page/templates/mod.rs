pub mod error;
pub mod expanded_image;
pub mod gallery;
pub mod input_panel;
pub mod layout;
pub mod notice;
pub mod output_panel;
pub mod sidebar;

use super::models::page_view::PageView;

pub fn render_page(view: &PageView) -> String {
    let sidebar = sidebar::sidebar_template(&view.sidebar_notices, &view.credential_status);

    let main = [
        "<div class=\"columns\">".to_string(),
        input_panel::input_panel_template(&view.draft, &view.main_notices),
        output_panel::output_panel_template(view.current.as_ref()),
        "</div>".to_string(),
        gallery::gallery_template(&view.gallery),
        expanded_image::expanded_image_template(view.expanded.as_ref()),
    ]
    .concat();

    layout::layout_template(&sidebar, &main)
}
