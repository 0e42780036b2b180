//! Stable cross-update identity for content elements.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An opaque, stable identifier scoped to a content type.
///
/// Two content values with equal identifiers are the same logical element
/// across updates, even when every other field differs. The caller's key is
/// reduced to a `u64` with the crate's default hasher; the scope keeps keys
/// from colliding across unrelated content types.
#[derive(Clone, Copy)]
pub struct Identifier {
    scope: TypeId,
    scope_name: &'static str,
    key: u64,
}

impl Identifier {
    /// Creates an identifier scoped to `T` from any hashable key.
    pub fn of<T: 'static>(key: impl Hash) -> Self {
        let mut hasher = crate::hash::default::new();
        key.hash(&mut hasher);

        Self {
            scope: TypeId::of::<T>(),
            scope_name: type_name::<T>(),
            key: hasher.finish(),
        }
    }

    /// The reduced key value. Stable for a given key within one process.
    pub fn key(&self) -> u64 {
        self.key
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope && self.key == other.key
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scope.hash(state);
        self.key.hash(state);
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short_name = self.scope_name.rsplit("::").next().unwrap_or(self.scope_name);
        write!(f, "Identifier({short_name}:{:x})", self.key)
    }
}
