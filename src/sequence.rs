//! The doubly-linked sequence of symbol positions, augmented with a
//! per-bigram linked list threading every position whose bigram equals some
//! particular value.
//!
//! Positions are never removed from the backing arena: a `SequenceRecord` is
//! created once per input symbol at `init` and only ever spliced out of the
//! active list and its same-bigram chain. This keeps position identity
//! stable across the whole run, which is what lets `BigramRecord`s,
//! `RunEntry`s and the main loop's scratch maps refer to positions by a
//! plain `usize` for the engine's entire lifetime.

use crate::symbol::{bigram_of, Bigram, Symbol};

/// Reserved out-of-band position value, analogous to a null pointer.
pub const SENTINEL: usize = usize::MAX;

#[derive(Debug, Clone)]
struct SequenceRecord<T> {
    symbol: Symbol<T>,
    prev_pos: usize,
    next_pos: usize,
    prev_same_bigram: usize,
    next_same_bigram: usize,
    /// Reachable from `head` by `next_pos` walks. Positions that have been
    /// consumed as the right half of a replacement are never active again.
    active: bool,
}

/// The sequence list: a fixed arena of positions plus the two families of
/// intrusive doubly-linked lists described above.
pub struct SequenceList<T> {
    records: Vec<SequenceRecord<T>>,
    head: usize,
}

impl<T: Clone> SequenceList<T> {
    /// Builds the initial sequence from `values`. Same-bigram links start
    /// empty; the caller threads them in a subsequent pass (see
    /// `Compressor::init_data`).
    pub fn init(values: Vec<T>) -> Self {
        let n = values.len();
        let mut records = Vec::with_capacity(n);
        for (i, v) in values.into_iter().enumerate() {
            records.push(SequenceRecord {
                symbol: Symbol::Terminal(v),
                prev_pos: if i == 0 { SENTINEL } else { i - 1 },
                next_pos: if i + 1 == n { SENTINEL } else { i + 1 },
                prev_same_bigram: SENTINEL,
                next_same_bigram: SENTINEL,
                active: true,
            });
        }
        Self {
            records,
            head: if n == 0 { SENTINEL } else { 0 },
        }
    }

    /// Number of positions ever created (fixed for the engine's lifetime).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn symbol(&self, p: usize) -> &Symbol<T> {
        &self.records[p].symbol
    }

    pub fn next_pos(&self, p: usize) -> usize {
        self.records[p].next_pos
    }

    pub fn prev_pos(&self, p: usize) -> usize {
        self.records[p].prev_pos
    }

    pub fn next_same_bigram(&self, p: usize) -> usize {
        self.records[p].next_same_bigram
    }

    pub fn prev_same_bigram(&self, p: usize) -> usize {
        self.records[p].prev_same_bigram
    }

    pub fn is_active(&self, p: usize) -> bool {
        self.records[p].active
    }

    /// The bigram beginning at `p`. Aborts if `p` has no active right
    /// neighbour — per the engine's error model, that indicates an internal
    /// invariant violation, never a caller mistake.
    pub fn bigram_at(&self, p: usize) -> Bigram<T> {
        let next = self.records[p].next_pos;
        assert_ne!(
            next, SENTINEL,
            "bigram_at: position {p} has no right neighbour"
        );
        bigram_of(self.records[p].symbol.clone(), self.records[next].symbol.clone())
    }

    /// True iff `p` still has a right neighbour and the bigram starting
    /// there is still exactly `bigram`. Used to validate a remembered
    /// position before trusting it, since a position can stay active while
    /// its bigram identity silently changes underneath it.
    pub fn bigram_at_matches(&self, p: usize, bigram: &Bigram<T>) -> bool
    where
        T: PartialEq,
    {
        self.records[p].next_pos != SENTINEL && self.bigram_at(p) == *bigram
    }

    /// Threads `next` immediately after `prev` in a same-bigram chain.
    pub fn link_same_bigram(&mut self, prev: usize, next: usize) {
        self.records[prev].next_same_bigram = next;
        self.records[next].prev_same_bigram = prev;
    }

    /// Replaces the bigram beginning at `p` with `new_symbol`: sets
    /// `symbol(p) := new_symbol` and splices `next_pos(p)` out of both the
    /// active sequence and its own same-bigram chain. `p` stays active; its
    /// former right neighbour does not.
    pub fn replace_pair_with_nonterminal(&mut self, p: usize, new_symbol: Symbol<T>) {
        let q = self.records[p].next_pos;
        assert_ne!(
            q, SENTINEL,
            "replace_pair_with_nonterminal: position {p} has no right neighbour"
        );
        self.delete_position(q);
        self.records[p].symbol = new_symbol;
    }

    /// Splices `pos` out of whatever same-bigram chain it currently
    /// threads, without touching its place in the active sequence. Used
    /// when a position's bigram identity changes because its right
    /// neighbour was just rewritten, even though `pos` itself stays active.
    pub fn unlink_same_bigram(&mut self, pos: usize) {
        let prev_b = self.records[pos].prev_same_bigram;
        let next_b = self.records[pos].next_same_bigram;
        if prev_b != SENTINEL {
            self.records[prev_b].next_same_bigram = next_b;
        }
        if next_b != SENTINEL {
            self.records[next_b].prev_same_bigram = prev_b;
        }
        self.records[pos].prev_same_bigram = SENTINEL;
        self.records[pos].next_same_bigram = SENTINEL;
    }

    /// Splices `pos` out of the active sequence and out of whatever
    /// same-bigram chain it currently threads, without touching its stored
    /// symbol. Used only for the right half of a replaced pair.
    fn delete_position(&mut self, pos: usize) {
        let prev = self.records[pos].prev_pos;
        let next = self.records[pos].next_pos;
        if prev != SENTINEL {
            self.records[prev].next_pos = next;
        } else {
            self.head = next;
        }
        if next != SENTINEL {
            self.records[next].prev_pos = prev;
        }

        let prev_b = self.records[pos].prev_same_bigram;
        let next_b = self.records[pos].next_same_bigram;
        if prev_b != SENTINEL {
            self.records[prev_b].next_same_bigram = next_b;
        }
        if next_b != SENTINEL {
            self.records[next_b].prev_same_bigram = prev_b;
        }

        self.records[pos].active = false;
    }

    /// Yields active positions in sequence order starting at `head`.
    pub fn walk_active_forward(&self, head: usize) -> ActivePositions<'_, T> {
        ActivePositions {
            list: self,
            current: head,
        }
    }

    /// Walks the active sequence from the head, cloning each symbol, to
    /// produce the emitted compressed output.
    pub fn emit(&self) -> Vec<Symbol<T>> {
        self.walk_active_forward(self.head)
            .map(|p| self.records[p].symbol.clone())
            .collect()
    }
}

/// Iterator over active positions starting at some head, following
/// `next_pos` links.
pub struct ActivePositions<'a, T> {
    list: &'a SequenceList<T>,
    current: usize,
}

impl<'a, T> Iterator for ActivePositions<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.current == SENTINEL {
            return None;
        }
        let pos = self.current;
        self.current = self.list.records[pos].next_pos;
        Some(pos)
    }
}
