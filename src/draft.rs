use crate::options::{Configuration, FieldKey, StyleOption};

/// The panel's uncommitted working copy of the article configuration.
#[derive(Debug, Clone)]
pub struct DraftState {
    current: Configuration,
}

impl DraftState {
    pub fn seed(initial: Configuration) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Configuration {
        self.current
    }

    /// Replaces one field and returns the new draft value.
    ///
    /// `option` must come from `field`'s option set. A mismatch is a bug in
    /// the caller: debug builds assert, release builds keep the draft as is.
    pub fn set_field(&mut self, field: FieldKey, option: StyleOption) -> Configuration {
        debug_assert!(
            field.accepts(&option),
            "option {:?} does not belong to {:?}",
            option.value(),
            field
        );
        if !field.accepts(&option) {
            tracing::error!(?field, value = option.value(), "rejected option from another field");
            return self.current;
        }
        self.current = self.current.with(field, option);
        self.current
    }

    /// Discards every in-progress edit.
    pub fn replace_all(&mut self, config: Configuration) {
        self.current = config;
    }
}
