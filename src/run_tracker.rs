//! Tracks maximal runs of identical symbols so that overlapping occurrences
//! of a same-symbol bigram (as in `"aaaa"`) are counted and replaced
//! consistently.
//!
//! In a run of `k` identical symbols `X^k`, the number of *non-overlapping*
//! occurrences of the bigram `XX` is `k / 2`, not `k - 1`. Only the two
//! endpoints of a run carry non-zero state; both carry the same
//! `run_length` and point at each other via `other_end`.

use crate::sequence::{SequenceList, SENTINEL};

#[derive(Debug, Clone, Copy, Default)]
struct RunEntry {
    run_length: usize,
    is_begin: bool,
    other_end: usize,
}

impl RunEntry {
    fn empty() -> Self {
        Self {
            run_length: 0,
            is_begin: false,
            other_end: SENTINEL,
        }
    }
}

/// One entry per sequence position; see module docs for the invariant.
pub struct RunTracker {
    entries: Vec<RunEntry>,
}

impl RunTracker {
    /// Scans the sequence once and records every maximal run of length
    /// >= 2 at its two endpoints.
    pub fn init<T: PartialEq>(seq: &SequenceList<T>) -> Self {
        let mut entries = vec![RunEntry::empty(); seq.len()];
        if seq.len() < 2 {
            return Self { entries };
        }

        let mut search_begin = true;
        let mut run_len = 0usize;
        let mut begin = SENTINEL;

        let mut p = seq.head();
        while seq.next_pos(p) != SENTINEL {
            let q = seq.next_pos(p);
            let equal = seq.symbol(p) == seq.symbol(q);
            let q_is_last = seq.next_pos(q) == SENTINEL;

            if !equal {
                if !search_begin {
                    Self::set_run(&mut entries, run_len, begin, p);
                }
                search_begin = true;
            } else {
                if search_begin {
                    run_len = 2;
                    begin = p;
                    search_begin = false;
                } else {
                    run_len += 1;
                }
                if q_is_last {
                    Self::set_run(&mut entries, run_len, begin, q);
                    search_begin = true;
                }
            }
            p = q;
        }

        Self { entries }
    }

    fn set_run(entries: &mut [RunEntry], run_length: usize, begin: usize, end: usize) {
        entries[begin] = RunEntry {
            run_length,
            is_begin: true,
            other_end: end,
        };
        entries[end] = RunEntry {
            run_length,
            is_begin: false,
            other_end: begin,
        };
    }

    pub fn is_run_begin(&self, p: usize) -> bool {
        let e = &self.entries[p];
        e.run_length > 0 && e.is_begin
    }

    pub fn is_run_end(&self, p: usize) -> bool {
        let e = &self.entries[p];
        e.run_length > 0 && !e.is_begin
    }

    pub fn other_end(&self, p: usize) -> usize {
        self.entries[p].other_end
    }

    pub fn run_length(&self, p: usize) -> usize {
        self.entries[p].run_length
    }
}
