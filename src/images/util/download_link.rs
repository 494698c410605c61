use mime::Mime;

use crate::{
    app::{models::api_error::ApiError, util::reqwest::get_bytes},
    images::models::download_link::DownloadLink,
};

const FILE_STEM: &str = "generated_image";
const LABEL: &str = "Download Image";

/// Fetches an image and embeds it in a `data:` URI so the browser can save it
/// without another round trip. The body is embedded whatever the status;
/// transport failures are returned to the caller.
pub async fn build_download_link(image_url: &str) -> Result<DownloadLink, ApiError> {
    let fetched = get_bytes(image_url).await?;

    let mime_type = resolve_mime(fetched.content_type.as_deref(), image_url);
    let href = format!(
        "data:{};base64,{}",
        mime_type.essence_str(),
        base64::encode(&fetched.data)
    );

    tracing::debug!(
        "built download link for {} ({}, {} bytes, {})",
        image_url,
        fetched.status,
        fetched.data.len(),
        mime_type
    );

    Ok(DownloadLink {
        href,
        file_name: format!("{}.{}", FILE_STEM, extension(&mime_type)),
        label: LABEL.to_string(),
    })
}

fn resolve_mime(content_type: Option<&str>, image_url: &str) -> Mime {
    if let Some(mime_type) = content_type.and_then(|value| value.parse::<Mime>().ok()) {
        if mime_type.type_() == mime::IMAGE {
            return mime_type;
        }
    }

    let path = image_url.split(['?', '#']).next().unwrap_or(image_url);
    let path = path.to_ascii_lowercase();

    if path.ends_with(".webp") {
        "image/webp".parse().unwrap_or(mime::IMAGE_PNG)
    } else if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        mime::IMAGE_JPEG
    } else {
        mime::IMAGE_PNG
    }
}

fn extension(mime_type: &Mime) -> &str {
    match mime_type.subtype().as_str() {
        "jpeg" => "jpg",
        "webp" => "webp",
        "gif" => "gif",
        _ => "png",
    }
}
