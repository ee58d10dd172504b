//! Board State Store
//!
//! Single owner of the board. Views read the snapshot and call the
//! helpers below; every applied change swaps in a new `Board` and bumps
//! `revision`. Rejected operations leave the store untouched.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::Result;
use crate::models::{Board, ColumnId};

/// Board snapshot with a change counter
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    pub board: Board,
    /// Incremented once per applied change
    pub revision: u64,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self { board, revision: 0 }
    }

    /// Swap in `result` if it succeeded; returns whether anything changed
    pub fn apply(&mut self, action: &str, result: Result<Board>) -> bool {
        match result {
            Ok(next) => {
                self.board = next;
                self.revision += 1;
                log::info!("[BOARD] {} applied (revision {})", action, self.revision);
                true
            }
            Err(e) => {
                log::debug!("[BOARD] {} ignored: {}", action, e);
                false
            }
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

fn store_apply(store: &BoardStore, action: &str, op: impl FnOnce(&Board) -> Result<Board>) {
    let result = store.board().with_untracked(op);
    // Subscribers are only notified when the snapshot was replaced
    let changed = store
        .try_maybe_update(|state| {
            let changed = state.apply(action, result);
            (changed, changed)
        })
        .unwrap_or(false);
    if !changed {
        return;
    }
    store.board().with_untracked(|board| {
        if let Ok(json) = serde_json::to_string(board) {
            log::trace!("[BOARD] snapshot {}", json);
        }
    });
}

/// Append a card to a column. Empty titles (cancelled prompt) are ignored.
pub fn store_add_card(store: &BoardStore, column: ColumnId, title: &str) {
    store_apply(store, "add card", |board| board.add_card(column, title));
}

/// Remove a card by ID
pub fn store_delete_card(store: &BoardStore, card_id: &str) {
    store_apply(store, "delete card", |board| board.delete_card(card_id));
}

/// Rename a card by ID
pub fn store_update_card_title(store: &BoardStore, card_id: &str, title: &str) {
    store_apply(store, "rename card", |board| board.update_card_title(card_id, title));
}

/// Apply a completed drag gesture
pub fn store_handle_drag_end(store: &BoardStore, active_id: &str, over_id: &str) {
    store_apply(store, "move card", |board| board.handle_drag_end(active_id, over_id));
}
