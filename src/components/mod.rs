//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod new_todo_form;
mod todo_count;
mod todo_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use todo_count::TodoCount;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
