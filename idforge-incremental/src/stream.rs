//! Per-item pipelines of change-tracked values.

use std::{hash::Hash, sync::Arc};

use crate::{CancelToken, Cancelled, MemoTable, Tracked};

/// An ordered collection of independently tracked per-item values.
///
/// Items have no data dependency on each other; cancellation is honored
/// between items, never in the middle of one.
#[derive(Debug, Clone)]
pub struct Stream<T> {
    items: Vec<Tracked<T>>,
}

impl<T> Stream<T> {
    /// Admit raw input values, using `seen` to detect content that no
    /// earlier run has processed. A value equal to one already seen enters
    /// the stream unchanged.
    pub fn input(
        values: Vec<T>,
        seen: &MemoTable<T, ()>,
        cancel: &CancelToken,
    ) -> Result<Self, Cancelled>
    where
        T: Eq + Hash + Clone,
    {
        let mut items = Vec::with_capacity(values.len());
        for value in values {
            cancel.check()?;
            let (_, first_time) = seen.get_or_compute(&value, || ());
            items.push(Tracked::new(Arc::new(value), first_time));
        }
        Ok(Self { items })
    }

    /// Memoized per-item transform. An item whose input content was already
    /// processed reuses the cached output and counts as unchanged.
    pub fn map<U>(
        &self,
        cache: &MemoTable<T, U>,
        cancel: &CancelToken,
        transform: impl Fn(&T) -> U,
    ) -> Result<Stream<U>, Cancelled>
    where
        T: Eq + Hash + Clone,
    {
        let mut items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            cancel.check()?;
            items.push(item.map(cache, &transform));
        }
        Ok(Stream { items })
    }

    /// Drop items failing the predicate. Dropped items produce no downstream
    /// node at all.
    pub fn filter(&self, keep: impl Fn(&T) -> bool) -> Stream<T>
    where
        T: Clone,
    {
        Stream {
            items: self
                .items
                .iter()
                .filter(|item| keep(item.value()))
                .cloned()
                .collect(),
        }
    }

    /// Filter with a projection: items mapping to `None` are dropped, the
    /// rest carry their change flag through the projection. The projection
    /// must be cheap; it is not memoized.
    pub fn filter_map<U>(&self, project: impl Fn(&T) -> Option<U>) -> Stream<U> {
        Stream {
            items: self
                .items
                .iter()
                .filter_map(|item| {
                    project(item.value())
                        .map(|value| Tracked::new(Arc::new(value), item.is_changed()))
                })
                .collect(),
        }
    }

    /// Gather every item into one aggregate node, keyed on the whole
    /// collection. The aggregate is unchanged exactly when an equal
    /// collection was already processed.
    pub fn collect(&self, cache: &MemoTable<Vec<T>, Vec<T>>) -> Tracked<Vec<T>>
    where
        T: Eq + Hash + Clone,
    {
        let key: Vec<T> = self.items.iter().map(|item| item.value().clone()).collect();
        let (value, computed) = cache.get_or_compute(&key, || key.clone());
        Tracked::new(value, computed)
    }

    /// Pair every item with a shared aggregate; each pair is changed when
    /// the item or the aggregate changed.
    pub fn combine_each<U>(&self, aggregate: &Tracked<U>) -> Stream<(T, Arc<U>)>
    where
        T: Clone,
    {
        Stream {
            items: self
                .items
                .iter()
                .map(|item| {
                    Tracked::new(
                        Arc::new((item.value().clone(), aggregate.share())),
                        item.is_changed() || aggregate.is_changed(),
                    )
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[Tracked<T>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tracked<T>> {
        self.items.iter()
    }

    /// Item values in stream order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| item.value())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
