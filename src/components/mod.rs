//! UI Components
//!
//! Leptos components for the board page.

mod new_item_form;
mod todo_list;
mod todo_row;
mod delete_button;

pub use new_item_form::NewItemForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use delete_button::DeleteButton;
