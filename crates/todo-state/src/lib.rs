//! Todo State Transitions
//!
//! Pure value types and transitions for the todo app. Every transition
//! takes `&self` and returns a fresh `TodoState`; nothing here touches
//! the DOM or holds mutable state. Invalid inputs (blank text, unknown
//! id, unrecognized filter label) return the state unchanged rather
//! than erroring.

use serde::{Deserialize, Serialize};

/// Which items are visible in the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in display order, for rendering the filter bar.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parses a filter-button label. Anything but the three known
    /// lowercase labels is rejected.
    pub fn parse(label: &str) -> Option<Filter> {
        match label {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// The label carried by the matching filter button.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Whether an item with the given completion flag passes this filter.
    fn matches(&self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !completed,
            Filter::Completed => completed,
        }
    }
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique incremental ID, assigned from `TodoState::next_id`.
    pub id: u32,

    /// Trimmed, non-empty text content.
    pub text: String,

    /// Whether the item is completed.
    pub completed: bool,
}

/// The full application state: items in insertion order, the next ID to
/// assign, and the active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    pub items: Vec<Item>,
    pub next_id: u32,
    pub filter: Filter,
}

impl TodoState {
    /// Fresh empty state: no items, IDs start at 1, filter `all`.
    pub fn empty() -> TodoState {
        TodoState {
            items: Vec::new(),
            next_id: 1,
            filter: Filter::All,
        }
    }

    /// Appends a new item with the trimmed text. Text that trims to
    /// empty leaves the state unchanged.
    pub fn add_item(&self, raw_text: &str) -> TodoState {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return self.clone();
        }

        let mut items = self.items.clone();
        items.push(Item {
            id: self.next_id,
            text: trimmed.to_string(),
            completed: false,
        });

        TodoState {
            items,
            next_id: self.next_id + 1,
            filter: self.filter,
        }
    }

    /// Flips the `completed` flag of the item with the given ID.
    /// Unknown IDs leave all items as they were.
    pub fn toggle_item(&self, id: u32) -> TodoState {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item {
                        completed: !item.completed,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();

        TodoState { items, ..self.clone() }
    }

    /// Switches the active filter to the one named by `candidate`.
    /// Unrecognized labels leave the filter unchanged.
    pub fn set_filter(&self, candidate: &str) -> TodoState {
        match Filter::parse(candidate) {
            Some(filter) => TodoState { filter, ..self.clone() },
            None => self.clone(),
        }
    }

    /// The items visible under the current filter, in insertion order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.completed))
            .collect()
    }

    /// How many items are not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
