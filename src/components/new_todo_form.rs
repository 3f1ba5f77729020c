//! New Todo Form Component
//!
//! Form for adding new todos.

use leptos::prelude::*;

use crate::store::use_todo_store;

/// Submission form: dispatches an add and clears the input.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (draft, set_draft) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Trimming lives in the transition; blank drafts no-op there
        store.add(&draft.get());
        set_draft.set(String::new());
    };

    view! {
        <form id="todo-form" class="new-todo-form" on:submit=on_submit>
            <input
                id="todo-input"
                type="text"
                placeholder="What needs doing?"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
