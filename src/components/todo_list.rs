//! Todo List Component
//!
//! The visible items under the current filter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::use_todo_store;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || store.visible_items()
                // Keyed on completion too, so toggling re-renders the row
                key=|item| (item.id, item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}
