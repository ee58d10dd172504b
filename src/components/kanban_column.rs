//! Kanban Column Component
//!
//! One lane: header with live count and "+" button, then its cards.
//! The lane body is a drop container keyed by the column id.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_container_mouseover, make_on_mouseleave, DropTarget};

use crate::components::CardItem;
use crate::context::use_app_context;
use crate::dialog;
use crate::models::{CardId, ColumnId};
use crate::store::{
    store_add_card, store_delete_card, store_update_card_title, use_board_store,
    BoardStateStoreFields,
};

/// Whether the lane body itself is under the pointer.
/// Hovering one of the lane's cards targets the card, not the lane.
pub fn is_column_drop_target(target: Option<&DropTarget>, column_id: ColumnId) -> bool {
    matches!(target, Some(DropTarget::Container(id)) if id == column_id.as_str())
}

/// Lane view
#[component]
pub fn KanbanColumn(column_id: ColumnId) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_app_context().dnd;

    let cards = move || {
        store.board().with(|board| {
            board
                .column(column_id)
                .map(|c| c.cards.clone())
                .unwrap_or_default()
        })
    };
    let card_count = move || {
        store.board().with(|board| board.column(column_id).map_or(0, |c| c.cards.len()))
    };
    let title = move || {
        store.board().with(|board| {
            board
                .column(column_id)
                .map(|c| c.title.clone())
                .unwrap_or_default()
        })
    };

    let on_add = move |_| {
        let title = dialog::prompt_card_title();
        store_add_card(&store, column_id, &title);
    };
    let on_delete = Callback::new(move |card_id: CardId| {
        store_delete_card(&store, card_id.as_str());
    });
    let on_rename = Callback::new(move |(card_id, title): (CardId, String)| {
        store_update_card_title(&store, card_id.as_str(), &title);
    });

    let on_mouseover = make_on_container_mouseover(dnd, column_id.as_str().to_string());
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_over = move || {
        dnd.drop_target_read
            .with(|target| is_column_drop_target(target.as_ref(), column_id))
    };

    let column_class = move || {
        let mut c = format!("kanban-column column-{}", column_id.as_str());
        if is_over() { c.push_str(" drop-over"); }
        c
    };

    view! {
        <div
            class=column_class
            data-column=column_id.as_str()
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
        >
            <div class="column-header">
                <div class="column-heading">
                    <h2>{title}</h2>
                    <span class="card-count">{card_count}</span>
                </div>
                <button class="add-card-btn" aria-label="Add card" on:click=on_add>"+"</button>
            </div>

            <div class="column-cards">
                <For
                    each=cards
                    key=|card| (card.id.clone(), card.title.clone())
                    children=move |card| {
                        view! {
                            <CardItem card=card on_delete=on_delete on_rename=on_rename />
                        }
                    }
                />
            </div>
        </div>
    }
}
