// ============================================================================
// collection-emitter - Fields
// Named sequence slots owned by a collection emitter
// ============================================================================

use std::collections::HashMap;

/// Named sequences, the typed stand-in for assigning `instance[name] = [...]`.
///
/// A field that was never assigned reads as absent; the collection methods
/// treat it as an empty sequence.
#[derive(Debug, Clone)]
pub struct Fields<T> {
    slots: HashMap<String, Vec<T>>,
}

impl<T> Fields<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Assign `values` to `name`, returning the previous contents.
    pub fn set(&mut self, name: impl Into<String>, values: Vec<T>) -> Option<Vec<T>> {
        self.slots.insert(name.into(), values)
    }

    pub fn get(&self, name: &str) -> Option<&[T]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    /// Mutable access to `name`, creating an empty sequence if unassigned.
    pub fn get_mut(&mut self, name: &str) -> &mut Vec<T> {
        self.slots.entry(name.to_string()).or_default()
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<T>> {
        self.slots.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Assigned field names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Self::new()
    }
}
