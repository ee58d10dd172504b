//! Kanban Board App
//!
//! Root component: provides the board store and drag context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::KanbanBoard;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Board;
use crate::store::BoardState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Sample cards get fresh ids on every load
    let board = Board::from_seed(&config.seed);
    log::info!("[APP] Seeded board with {} cards", board.card_count());

    provide_context(Store::new(BoardState::new(board)));
    provide_context(AppContext::new());

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>"Kanban Board"</h1>
                <p class="board-subtitle">"Drag cards between columns • Double-click to edit"</p>
            </header>

            <KanbanBoard />
        </div>
    }
}
