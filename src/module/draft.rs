//! Lazily copied draft handed to module reducers.

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Mutable view of a feature state that copies on first write.
///
/// Reads go to the prior state. The first mutable access clones it; from
/// then on reads and writes hit the copy. A draft that was never written
/// keeps the prior state node, whatever `S`'s `PartialEq` says.
///
/// Only the state value itself is cloned. Fields held in `Arc` stay shared
/// between the prior and the next state.
pub struct Draft<'a, S> {
    origin: &'a S,
    copy: Option<S>,
}

impl<'a, S: Clone> Draft<'a, S> {
    pub(crate) fn new(origin: &'a S) -> Self {
        Self { origin, copy: None }
    }

    /// True once the draft has been mutably accessed.
    pub fn is_modified(&self) -> bool {
        self.copy.is_some()
    }

    /// Replaces the whole state.
    pub fn replace(&mut self, value: S) {
        self.copy = Some(value);
    }

    /// The written copy, or `None` when the prior state is still current.
    pub(crate) fn into_modified(self) -> Option<S> {
        self.copy
    }
}

impl<S> Deref for Draft<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.copy.as_ref().unwrap_or(self.origin)
    }
}

impl<S: Clone> DerefMut for Draft<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        let origin = self.origin;
        self.copy.get_or_insert_with(|| origin.clone())
    }
}

impl<S: fmt::Debug> fmt::Debug for Draft<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draft")
            .field("state", &**self)
            .field("modified", &self.copy.is_some())
            .finish()
    }
}
