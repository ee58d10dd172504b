//! Delete Button Component
//!
//! Card delete control kept out of the card's drag gesture.

use leptos::prelude::*;

/// ✕ button shown on card hover.
///
/// Pointer-down and click stop propagating so the card's drag listeners
/// never see them.
#[component]
pub fn DeleteButton(
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="card-delete-btn"
            aria-label="Delete card"
            on:mousedown=move |ev| ev.stop_propagation()
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "✕"
        </button>
    }
}
