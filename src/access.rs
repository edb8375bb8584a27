use std::collections::HashMap;

use crate::{AccessError, Value};

/// Resolves identifiers in rule conditions against the current subject.
///
/// Implementations bind to one subject at a time; `get` must not mutate it.
pub trait PropertyAccess {
    /// Read `identifier` from the bound subject.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] if the identifier is unknown for this subject
    /// type, its value is unsupported, or no subject is bound.
    fn get(&self, identifier: &str) -> Result<Value, AccessError>;
}

impl<A: PropertyAccess + ?Sized> PropertyAccess for &A {
    fn get(&self, identifier: &str) -> Result<Value, AccessError> {
        (**self).get(identifier)
    }
}

/// A fixed map of property values, for subjects that are plain data.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    data: HashMap<String, Value>,
}

impl Properties {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value.
    #[must_use]
    pub fn set(mut self, identifier: &str, value: impl Into<Value>) -> Self {
        self.insert(identifier, value.into());
        self
    }

    /// Insert a property value (mutable reference version).
    pub fn insert(&mut self, identifier: &str, value: Value) {
        self.data.insert(identifier.to_owned(), value);
    }

    /// Look up a property without going through [`PropertyAccess`].
    #[must_use]
    pub fn value(&self, identifier: &str) -> Option<&Value> {
        self.data.get(identifier)
    }
}

impl PropertyAccess for Properties {
    fn get(&self, identifier: &str) -> Result<Value, AccessError> {
        self.data
            .get(identifier)
            .cloned()
            .ok_or_else(|| AccessError::UnknownIdentifier {
                identifier: identifier.to_owned(),
            })
    }
}
