use std::collections::HashMap;

/// The variables of one run, mapped to their last assigned values.
///
/// A scope starts empty and only grows: assignment inserts or overwrites,
/// nothing removes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    variables: HashMap<String, i64>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value bound to `name`. A binding of `0` is as present as any other.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        if let Some(slot) = self.variables.get_mut(name) {
            return Some(std::mem::replace(slot, value));
        }
        self.variables.insert(name.to_string(), value);
        None
    }

    /// Whether `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
