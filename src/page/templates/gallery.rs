use crate::{
    app::{config::GALLERY_COLUMNS, util::html::escape},
    gallery::models::gallery_entry::GalleryEntry,
};

pub fn gallery_template(entries: &[GalleryEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let columns: String = (0..GALLERY_COLUMNS)
        .map(|column| {
            let cells: String = entries
                .iter()
                .filter(|entry| entry.column == column)
                .map(gallery_entry_template)
                .collect();

            format!("<div class=\"gallery-column\">{}</div>", cells)
        })
        .collect();

    format!(
        "<section><h2>Image Gallery</h2><div class=\"gallery\">{}</div></section>",
        columns
    )
}

fn gallery_entry_template(entry: &GalleryEntry) -> String {
    format!(
        "
        <div class=\"gallery-entry\">
            <img src=\"{}\" alt=\"{}\" title=\"{}\">
            <form method=\"post\" action=\"/gallery/{}/reuse\"><button type=\"submit\">Reuse Prompt {}</button></form>
            <form method=\"post\" action=\"/gallery/{}/expand\"><button type=\"submit\">Expand Image {}</button></form>
        </div>
        ",
        escape(&entry.result.image_url),
        escape(&entry.result.prompt),
        escape(&entry.result.prompt),
        entry.index,
        entry.position,
        entry.index,
        entry.position
    )
}
