//! Todo Frontend App
//!
//! Root component wiring the form, list, filter bar, and counter.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTodoForm, TodoCount, TodoList};
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for the whole session
    let store = TodoStore::new();
    provide_context(store);

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <TodoList />

            <footer class="todo-footer">
                <TodoCount />
                <FilterBar />
            </footer>
        </main>
    }
}
