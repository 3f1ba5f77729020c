//! Todo Count Component
//!
//! Remaining-items label.

use leptos::prelude::*;

use crate::store::use_todo_store;

/// Shows how many items are left to do. The copy never pluralizes
/// "item"; that is the wording the app has always shipped.
#[component]
pub fn TodoCount() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <span id="todo-count" class="item-count">
            {move || {
                let count = store.remaining();
                if count == 1 {
                    "1 item left".to_string()
                } else {
                    format!("{} item left", count)
                }
            }}
        </span>
    }
}
