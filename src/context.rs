//! Ambient execution context attached to suspended frames.

use std::collections::HashMap;

use crate::value::Value;

/// Immutable associative environment describing the ambient configuration
/// that governs code resumed at a frame.
///
/// Frames minted for out-of-band resumption always carry an empty context:
/// the bridge synthesizes a resumption call rather than continuing an
/// existing one, so nothing is inherited from the suspension site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    entries: HashMap<String, Value>,
}

impl Context {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extend with one binding, returning a new context. `self` is unchanged.
    pub fn with(&self, name: impl Into<String>, value: Value) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(name.into(), value);
        Context { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
