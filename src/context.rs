//! Application Context
//!
//! Shared drag state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Drag gesture state shared by every column and card
    pub dnd: DndSignals,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            dnd: create_dnd_signals(),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
