//! Hash index from a bigram to a handle into the [`FrequencyQueue`](crate::frequency_queue::FrequencyQueue)
//! arena that owns its `BigramRecord`.
//!
//! The index only ever stores handles, never records, so it stays valid in
//! lock-step with whatever the queue does to the arena — see the "cyclic
//! reference" design note for why the two are split this way.

use ahash::AHashMap;
use slotmap::DefaultKey;
use std::hash::Hash;

use crate::symbol::Bigram;

/// Maps a currently-tracked bigram (frequency >= 2) to its record's handle.
pub struct BigramIndex<T> {
    map: AHashMap<Bigram<T>, DefaultKey>,
}

impl<T: Eq + Hash> BigramIndex<T> {
    pub fn new() -> Self {
        Self {
            map: AHashMap::default(),
        }
    }

    pub fn get(&self, bigram: &Bigram<T>) -> Option<DefaultKey> {
        self.map.get(bigram).copied()
    }

    pub fn contains(&self, bigram: &Bigram<T>) -> bool {
        self.map.contains_key(bigram)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn insert(&mut self, bigram: Bigram<T>, key: DefaultKey) {
        self.map.insert(bigram, key);
    }

    pub(crate) fn remove(&mut self, bigram: &Bigram<T>) -> Option<DefaultKey> {
        self.map.remove(bigram)
    }
}

impl<T: Eq + Hash> Default for BigramIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}
