//! Global Application State Store
//!
//! Owns the current immutable `TodoState` behind one reactive slot.
//! All mutation funnels through the dispatch methods, which run a pure
//! transition and replace the held value wholesale.

use leptos::prelude::*;
use todo_state::{Filter, Item, TodoState};

/// State container provided via context to every component.
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: RwSignal<TodoState>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(TodoState::empty()),
        }
    }

    /// Single mutation entry point: runs one pure transition against the
    /// current state and stores the result.
    fn apply(&self, transition: impl FnOnce(&TodoState) -> TodoState) {
        let next = self.state.with_untracked(transition);
        self.state.set(next);
    }

    /// Adds an item from the submitted text. Blank text no-ops in the
    /// transition itself.
    pub fn add(&self, raw_text: &str) {
        web_sys::console::log_1(&format!("[STORE] add {:?}", raw_text).into());
        self.apply(|state| state.add_item(raw_text));
    }

    /// Flips completion of the item with the given ID.
    pub fn toggle(&self, id: u32) {
        self.apply(|state| state.toggle_item(id));
    }

    /// Switches to the filter named by a filter-button label.
    pub fn set_filter(&self, label: &str) {
        self.apply(|state| state.set_filter(label));
    }

    /// Visible items under the current filter, cloned for rendering.
    pub fn visible_items(&self) -> Vec<Item> {
        self.state
            .with(|state| state.visible_items().into_iter().cloned().collect())
    }

    /// Count of items not yet completed.
    pub fn remaining(&self) -> usize {
        self.state.with(|state| state.remaining_count())
    }

    /// The active filter.
    pub fn filter(&self) -> Filter {
        self.state.with(|state| state.filter)
    }
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}
