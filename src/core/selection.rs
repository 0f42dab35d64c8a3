use std::collections::HashMap;

/// Externally owned membership test for series/item visibility.
///
/// The legend consults this on every render pass and never mutates it;
/// toggling happens in the host application in response to dispatched intents.
pub trait SelectionState {
    fn is_selected(&self, name: &str) -> bool;
}

/// Map-backed selection state where names default to selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMap {
    overrides: HashMap<String, bool>,
}

impl SelectionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected(&mut self, name: impl Into<String>, selected: bool) {
        self.overrides.insert(name.into(), selected);
    }

    #[must_use]
    pub fn with_unselected(mut self, name: impl Into<String>) -> Self {
        self.set_selected(name, false);
        self
    }

    /// Flips the recorded state for `name`, defaulting from selected.
    pub fn toggle(&mut self, name: &str) {
        let next = !self.is_selected(name);
        self.overrides.insert(name.to_owned(), next);
    }
}

impl SelectionState for SelectionMap {
    fn is_selected(&self, name: &str) -> bool {
        self.overrides.get(name).copied().unwrap_or(true)
    }
}
