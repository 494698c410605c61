use crate::{
    app::{
        config::{GALLERY_COLUMNS, GALLERY_SIZE},
        models::api_error::ApiError,
    },
    images::models::generation_result::GenerationResult,
    sessions::models::session_state::SessionState,
};

use super::{errors::GalleryApiError, models::gallery_entry::GalleryEntry};

/// The most recent history entries, newest first.
pub fn recent_entries(history: &[GenerationResult]) -> Vec<GalleryEntry> {
    history
        .iter()
        .enumerate()
        .rev()
        .take(GALLERY_SIZE)
        .enumerate()
        .map(|(i, (index, result))| GalleryEntry {
            position: i + 1,
            index,
            column: i % GALLERY_COLUMNS,
            result: result.clone(),
        })
        .collect()
}

/// Copies an entry's prompt into the form draft.
pub fn reuse_prompt(session: &mut SessionState, index: usize) -> Result<(), ApiError> {
    let Some(entry) = session.history.get(index) else {
        return Err(GalleryApiError::ImageNotFound.value());
    };

    session.draft.prompt = entry.prompt.to_string();
    Ok(())
}

pub fn expand_image(session: &mut SessionState, index: usize) -> Result<(), ApiError> {
    let Some(entry) = session.history.get(index) else {
        return Err(GalleryApiError::ImageNotFound.value());
    };

    session.expanded = Some(entry.clone());
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn history(n: usize) -> Vec<GenerationResult> {
        (1..=n)
            .map(|i| GenerationResult::new(&format!("prompt {}", i), &format!("http://img/{}.png", i)))
            .collect()
    }

    #[test]
    fn shows_at_most_five_newest_first() {
        let entries = recent_entries(&history(8));

        let urls: Vec<&str> = entries.iter().map(|e| e.result.image_url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "http://img/8.png",
                "http://img/7.png",
                "http://img/6.png",
                "http://img/5.png",
                "http://img/4.png"
            ]
        );
        assert_eq!(entries[0].index, 7);
        assert_eq!(entries[4].index, 3);
    }

    #[test]
    fn positions_and_columns_follow_display_order() {
        let entries = recent_entries(&history(3));

        let layout: Vec<(usize, usize, usize)> =
            entries.iter().map(|e| (e.position, e.index, e.column)).collect();
        assert_eq!(layout, [(1, 2, 0), (2, 1, 1), (3, 0, 2)]);
    }

    #[test]
    fn empty_history_has_no_entries() {
        assert!(recent_entries(&[]).is_empty());
    }

    #[test]
    fn expand_sets_the_expanded_image_without_touching_history() {
        let mut session = SessionState::new("s1");
        session.history = history(3);
        session.current = Some(session.history[2].clone());
        let before = session.history.clone();

        expand_image(&mut session, 1).unwrap();

        assert_eq!(session.expanded, Some(before[1].clone()));
        assert_eq!(session.history, before);
        assert_eq!(session.current, Some(before[2].clone()));
    }

    #[test]
    fn reuse_copies_the_prompt_into_the_draft() {
        let mut session = SessionState::new("s1");
        session.history = history(2);

        reuse_prompt(&mut session, 0).unwrap();

        assert_eq!(session.draft.prompt, "prompt 1");
        assert_eq!(session.history.len(), 2);
    }

    #[test]
    fn unknown_index_is_not_found() {
        let mut session = SessionState::new("s1");
        session.history = history(1);

        assert_eq!(expand_image(&mut session, 1).unwrap_err().code, StatusCode::NOT_FOUND);
        assert_eq!(reuse_prompt(&mut session, 9).unwrap_err().code, StatusCode::NOT_FOUND);
        assert!(session.expanded.is_none());
    }
}
