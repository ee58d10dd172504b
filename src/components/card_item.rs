//! Card Item Component
//!
//! A single draggable card with inline rename and delete.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_item_mouseover, make_on_mouseleave, make_on_mousedown, DropTarget};

use crate::components::DeleteButton;
use crate::context::use_app_context;
use crate::models::{Card, CardId};

/// Display mode of a card
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardMode {
    #[default]
    Viewing,
    Editing,
}

impl CardMode {
    /// Double-click on the title. Ignored right after a drop.
    pub fn on_double_click(self, drag_just_ended: bool) -> Self {
        if drag_just_ended { self } else { CardMode::Editing }
    }

    /// Blur or Enter. Returns the next mode and whether the input must be committed.
    pub fn on_commit(self) -> (Self, bool) {
        (CardMode::Viewing, self == CardMode::Editing)
    }

    /// Drags only start from a card that is not being edited
    pub fn can_drag(self) -> bool {
        self == CardMode::Viewing
    }
}

/// Blur or Enter on the title input.
///
/// `leave` always runs first: renaming re-keys the card and unmounts this
/// view, so the mode must be settled before `rename` sees the input value.
/// `rename` only runs when the card was actually being edited.
pub fn finish_edit(
    mode: CardMode,
    value: String,
    leave: impl FnOnce(CardMode),
    rename: impl FnOnce(String),
) {
    let (next, should_commit) = mode.on_commit();
    leave(next);
    if should_commit {
        rename(value);
    }
}

/// Card view
#[component]
pub fn CardItem(
    card: Card,
    /// Called with the card id when the delete button is clicked
    on_delete: Callback<CardId>,
    /// Called with the card id and the input value when an edit is committed
    on_rename: Callback<(CardId, String)>,
) -> impl IntoView {
    let dnd = use_app_context().dnd;

    let id = card.id.clone();
    let title = card.title.clone();
    let (mode, set_mode) = signal(CardMode::Viewing);
    let (value, set_value) = signal(card.title.clone());
    let input_ref = NodeRef::<Input>::new();

    let on_mousedown = make_on_mousedown(
        dnd,
        id.to_string(),
        Signal::derive(move || mode.get().can_drag()),
    );
    let on_mouseover = make_on_item_mouseover(dnd, id.to_string());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Focus the input when entering edit mode
    Effect::new(move |_| {
        if mode.get() == CardMode::Editing {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let commit = {
        let id = id.clone();
        move || {
            finish_edit(
                mode.get_untracked(),
                value.get_untracked(),
                |next| set_mode.set(next),
                |title| on_rename.run((id.clone(), title)),
            );
        }
    };

    let card_class = {
        let drag_id = id.to_string();
        let target = DropTarget::Item(id.to_string());
        move || {
            let mut c = String::from("card-item");
            if dnd.is_dragging(&drag_id) { c.push_str(" dragging"); }
            if dnd.is_target(&target) { c.push_str(" drop-target"); }
            if mode.get() == CardMode::Editing { c.push_str(" editing"); }
            c
        }
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
        >
            {move || match mode.get() {
                CardMode::Editing => {
                    let commit_on_blur = commit.clone();
                    let commit_on_enter = commit.clone();
                    view! {
                        <input
                            type="text"
                            class="card-title-input"
                            node_ref=input_ref
                            prop:value=move || value.get()
                            on:input=move |ev| set_value.set(event_target_value(&ev))
                            on:blur=move |_| commit_on_blur()
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    commit_on_enter();
                                }
                            }
                        />
                    }.into_any()
                }
                CardMode::Viewing => {
                    let delete_id = id.clone();
                    let current_title = title.clone();
                    view! {
                        <div class="card-row">
                            <span
                                class="card-title"
                                on:dblclick=move |_| {
                                    let next = mode.get_untracked()
                                        .on_double_click(dnd.drag_just_ended_read.get_untracked());
                                    if next == CardMode::Editing {
                                        set_value.set(current_title.clone());
                                    }
                                    set_mode.set(next);
                                }
                            >
                                {title.clone()}
                            </span>
                            <DeleteButton on_delete=Callback::new(move |_| on_delete.run(delete_id.clone())) />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
