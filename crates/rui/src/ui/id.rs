//! Stable widget identities
//!
//! Stateful widgets (sliders, text fields, scrollable panels) are keyed by a
//! `WidgetId` supplied at the call site, so two widgets never share drag,
//! focus or scroll state by accident.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Opaque identity of a stateful widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Derive an id by hashing any hashable key
    pub fn new(source: impl Hash) -> Self {
        let mut hasher = DefaultHasher::new();
        source.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Derive a child id scoped under this one
    pub fn with(self, child: impl Hash) -> Self {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        child.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Raw id value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<&str> for WidgetId {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<u64> for WidgetId {
    fn from(source: u64) -> Self {
        Self::new(source)
    }
}
