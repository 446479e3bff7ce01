use crate::ports::{DayStore, DayTemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DayStore, T: DayTemplateStore> {
    store: S,
    templates: T,
}

impl<S: DayStore, T: DayTemplateStore> AppContext<S, T> {
    /// Create a new application context.
    pub fn new(store: S, templates: T) -> Self {
        Self { store, templates }
    }

    /// Get a reference to the day store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the day template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }
}
