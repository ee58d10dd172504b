//! Browser Dialogs
//!
//! Blocking prompts used by the board views.

/// Blocking browser prompt for a new card title.
/// Cancel, an empty answer, or a missing `window` all yield an empty string.
pub fn prompt_card_title() -> String {
    web_sys::window()
        .and_then(|win| win.prompt_with_message("Enter card title").ok().flatten())
        .unwrap_or_default()
}
