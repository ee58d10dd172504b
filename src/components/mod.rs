//! UI Components
//!
//! Board, lane and card views.

mod kanban_board;
mod kanban_column;
mod card_item;
mod delete_button;

pub use kanban_board::KanbanBoard;
pub use kanban_column::KanbanColumn;
pub use card_item::CardItem;
pub use delete_button::DeleteButton;
