//! Todo Row Component
//!
//! A single item in the list.

use leptos::prelude::*;

use todo_state::Item;

use crate::store::use_todo_store;

/// One list row: completion checkbox plus the item text.
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_todo_store();

    let id = item.id;
    let completed = item.completed;
    let text = item.text.clone();

    view! {
        <li
            class=if completed { "todo-item completed" } else { "todo-item" }
            data-id=id.to_string()
        >
            // Checkbox
            <input
                type="checkbox"
                class="toggle-checkbox"
                checked=completed
                on:change=move |_| store.toggle(id)
            />

            // Text
            <span class="text">{text}</span>
        </li>
    }
}
