//! Filter Bar Component
//!
//! Buttons for switching between all / active / completed.

use leptos::prelude::*;

use todo_state::Filter;

use crate::store::use_todo_store;

/// Filter options with their display labels
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

/// Exactly three filter buttons; the one matching the current filter is
/// highlighted.
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|&(filter, label)| {
                let is_active = move || store.filter() == filter;

                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-button active" } else { "filter-button" }
                        data-filter=filter.label()
                        on:click=move |_| store.set_filter(filter.label())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
