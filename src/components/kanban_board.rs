//! Kanban Board Component
//!
//! Lays out the three lanes and routes finished drags to the store.

use leptos::prelude::*;
use leptos_dragdrop::bind_global_mouseup;

use crate::components::KanbanColumn;
use crate::context::use_app_context;
use crate::models::ColumnId;
use crate::store::{store_handle_drag_end, use_board_store, BoardStateStoreFields};

/// Board view with DnD support
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board_store();
    let dnd = use_app_context().dnd;

    // One call per completed gesture that ended over a card or a lane
    bind_global_mouseup(dnd, move |dragged_id, target| {
        log::debug!("[DND] Drop: dragged={}, target={:?}", dragged_id, target);
        store_handle_drag_end(&store, &dragged_id, target.id());
    });

    view! {
        <div
            class=move || if dnd.is_active() { "board-columns dragging" } else { "board-columns" }
            data-revision=move || store.revision().get().to_string()
        >
            {ColumnId::ALL
                .into_iter()
                .map(|column_id| view! { <KanbanColumn column_id=column_id /> })
                .collect_view()}
        </div>
    }
}
