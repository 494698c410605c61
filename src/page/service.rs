use crate::{
    app::models::api_error::ApiError,
    credentials::service::credential_status,
    gallery::service::recent_entries,
    images::{models::generation_result::GenerationResult, util::download_link::build_download_link},
    sessions::{
        enums::notice_target::NoticeTarget,
        models::{notice::Notice, session_state::SessionState},
        store::SessionStore,
    },
};

use super::models::page_view::{PageView, ShownImage};

/// Recomputes the page for a session. Download links are fetched from a
/// snapshot without holding the session lock; pending notices are then taken
/// from the stored session. A failed image fetch aborts the render and
/// leaves the notices queued.
pub async fn build_page_view(
    sessions: &SessionStore,
    session_id: &str,
    default_token: Option<&str>,
) -> Result<PageView, ApiError> {
    let snapshot = sessions.checkout(session_id).await?;

    let current = match &snapshot.current {
        Some(result) => Some(show(result).await?),
        None => None,
    };
    let expanded = match &snapshot.expanded {
        Some(result) => Some(show(result).await?),
        None => None,
    };

    sessions
        .update(session_id, |session| {
            assemble_page_view(session, current, expanded, default_token)
        })
        .await
}

pub fn assemble_page_view(
    session: &mut SessionState,
    current: Option<ShownImage>,
    expanded: Option<ShownImage>,
    default_token: Option<&str>,
) -> PageView {
    let (sidebar_notices, main_notices): (Vec<Notice>, Vec<Notice>) = session
        .take_notices()
        .into_iter()
        .partition(|notice| notice.target == NoticeTarget::Sidebar);

    PageView {
        sidebar_notices,
        credential_status: credential_status(&session.credential, default_token),
        main_notices,
        draft: session.draft.clone(),
        current,
        gallery: recent_entries(&session.history),
        expanded,
    }
}

async fn show(result: &GenerationResult) -> Result<ShownImage, ApiError> {
    Ok(ShownImage {
        result: result.clone(),
        download: build_download_link(&result.image_url).await?,
    })
}
