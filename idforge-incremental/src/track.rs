//! Change-tracked values.

use std::{hash::Hash, sync::Arc};

use crate::MemoTable;

/// A value plus whether it was recomputed during the current run.
///
/// `changed == false` means the value was served from a memo table, i.e. an
/// equal input had already been processed by an earlier run (or earlier in
/// this one). Downstream stages use the flag only for reporting; reuse
/// decisions are always made by content, never by the flag.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    value: Arc<T>,
    changed: bool,
}

impl<T> Tracked<T> {
    pub fn new(value: Arc<T>, changed: bool) -> Self {
        Self { value, changed }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Share the underlying allocation.
    pub fn share(&self) -> Arc<T> {
        Arc::clone(&self.value)
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Memoized transform of a single aggregate value.
    pub fn map<U>(&self, cache: &MemoTable<T, U>, transform: impl FnOnce(&T) -> U) -> Tracked<U>
    where
        T: Eq + Hash + Clone,
    {
        let (value, computed) = cache.get_or_compute(self.value(), || transform(self.value()));
        Tracked::new(value, computed)
    }

    /// Pair two aggregate values; the pair counts as changed when either
    /// side changed.
    pub fn combine<U>(&self, other: &Tracked<U>) -> Tracked<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        Tracked::new(
            Arc::new((self.value().clone(), other.value().clone())),
            self.changed || other.changed,
        )
    }
}
