//! Single-slot-per-name synchronous notifier.

use std::collections::HashMap;
use std::fmt;

/// Callback stored in a [`Notifier`] slot.
pub type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// Named-subscriber event channel.
///
/// Each name is a *slot*, not a topic: it holds at most one callback.
/// Connecting with a name that is already taken replaces the previous
/// callback (last registration wins). Owners emit to the slot names they
/// document; there is no broadcast to every slot.
pub struct Notifier<T> {
    slots: HashMap<String, Callback<T>>,
}

impl<T> Notifier<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Register `callback` under `name`, replacing any existing callback.
    pub fn connect<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.slots.insert(name.into(), Box::new(callback));
    }

    /// Remove the callback registered under `name`. Absent names are ignored.
    pub fn disconnect(&mut self, name: &str) {
        self.slots.remove(name);
    }

    /// Invoke the callback registered under `name`, if any.
    ///
    /// Returns `true` when a callback ran.
    pub fn emit(&mut self, name: &str, payload: &T) -> bool {
        match self.slots.get_mut(name) {
            Some(callback) => {
                callback(payload);
                true
            }
            None => false,
        }
    }

    pub fn is_connected(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Notifier").field("slots", &names).finish()
    }
}
