//! Orchestrates the batch replacement loop: repeatedly finds the bigram of
//! highest frequency and turns every (non-overlapping) occurrence of it
//! into a fresh rule, until no bigram occurs more than once.
//!
//! Grounded in the teacher crate's `repair.rs` orchestration shape (arena
//! of records plus a priority structure driving `compress()`), generalised
//! from its `PairSymbolId`/`values_dedup` bookkeeping to the tagged
//! `Symbol<T>` model and the run-aware frequency counting this algorithm
//! requires.

use ahash::AHashMap;
use std::hash::Hash;

use crate::bigram_index::BigramIndex;
use crate::frequency_queue::FrequencyQueue;
use crate::rule::Rule;
use crate::run_tracker::RunTracker;
use crate::sequence::{SequenceList, SENTINEL};
use crate::symbol::{bigram_of, Bigram, Symbol};

/// Runtime statistics about one completed compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    pub input_len: usize,
    pub compressed_len: usize,
    pub rule_count: usize,
}

/// Owns the working data structures for one compression run. Not meant to
/// be reused across inputs — build one via [`Compressor::new`], inspect it
/// with [`Compressor::rules`], [`Compressor::compressed_text`] and
/// [`Compressor::stats`], then take ownership of the result with
/// [`Compressor::into_parts`] (or skip straight to the result with the
/// [`Compressor::compress`] convenience wrapper).
pub struct Compressor<T> {
    sequence: SequenceList<T>,
    bigram_index: BigramIndex<T>,
    freq_queue: FrequencyQueue<T>,
    rules: Vec<Rule<T>>,
    max_f: usize,
    /// Bigrams newly formed by a replacement that currently have exactly
    /// one known live occurrence — not yet worth a [`FrequencyQueue`]
    /// entry, but remembered so a second occurrence can be recognised in
    /// O(1) instead of rescanning. Entries are validated against the live
    /// sequence before use, since the remembered position's bigram
    /// identity can have changed in the meantime.
    pending_singletons: AHashMap<Bigram<T>, usize>,
}

impl<T: Clone + Eq + Hash> Compressor<T> {
    /// Runs the whole algorithm on `values` and returns a compressor holding
    /// the finished grammar, queryable via [`Compressor::rules`],
    /// [`Compressor::compressed_text`] and [`Compressor::stats`]. Sequences
    /// shorter than 4 symbols can never contain a repeated bigram worth a
    /// rule, so they come back unchanged with no rules.
    pub fn new(values: Vec<T>) -> Self {
        if values.len() < 4 {
            return Self::trivial(values);
        }
        let mut compressor = Self::init_data(values);
        compressor.compress_data();
        compressor
    }

    /// Runs the whole algorithm on `values` and returns the compressed
    /// sequence alongside the rules it was built from, for callers that
    /// just want the result and don't need a live `Compressor` to query.
    pub fn compress(values: Vec<T>) -> (Vec<Symbol<T>>, Vec<Rule<T>>) {
        Self::new(values).into_parts()
    }

    /// A compressor over a sequence too short to ever contain a repeated
    /// bigram, holding the input back unchanged with no rules.
    fn trivial(values: Vec<T>) -> Self {
        Self {
            sequence: SequenceList::init(values),
            bigram_index: BigramIndex::new(),
            freq_queue: FrequencyQueue::new(),
            rules: Vec::new(),
            max_f: 0,
            pending_singletons: AHashMap::default(),
        }
    }

    /// Builds the initial sequence list and bigram frequency queue.
    /// Frequencies of same-symbol bigrams (runs) are corrected for overlap
    /// up front, per [`RunTracker`]'s contract.
    fn init_data(values: Vec<T>) -> Self {
        let mut sequence = SequenceList::init(values);
        let run_tracker = RunTracker::init(&sequence);
        let mut bigram_index = BigramIndex::new();
        let mut freq_queue = FrequencyQueue::new();

        // bigram -> (first occurrence, last occurrence so far, raw count)
        let mut seen: AHashMap<Bigram<T>, (usize, usize, u32)> = AHashMap::default();

        let mut p = sequence.head();
        while sequence.next_pos(p) != SENTINEL {
            let q = sequence.next_pos(p);
            let bigram = sequence.bigram_at(p);
            match seen.get_mut(&bigram) {
                Some(entry) => {
                    sequence.link_same_bigram(entry.1, p);
                    entry.1 = p;
                    entry.2 += 1;
                }
                None => {
                    seen.insert(bigram, (p, p, 1));
                }
            }
            p = q;
        }

        // Correct same-symbol bigram counts: a maximal run of length k
        // contributes floor(k / 2) non-overlapping occurrences, not k - 1.
        // The same bigram value can have several separate runs (e.g. "aaxaa"
        // has two runs of 'a'), so each run's contribution is summed, never
        // assigned outright — an assignment would let a later run silently
        // overwrite an earlier one's count.
        let mut run_corrected: AHashMap<Bigram<T>, u32> = AHashMap::default();
        let mut p = sequence.head();
        while p != SENTINEL && sequence.next_pos(p) != SENTINEL {
            if run_tracker.is_run_begin(p) {
                let run_len = run_tracker.run_length(p);
                let bigram = sequence.bigram_at(p);
                *run_corrected.entry(bigram).or_insert(0) += (run_len / 2) as u32;
                p = run_tracker.other_end(p);
                if sequence.next_pos(p) == SENTINEL {
                    break;
                }
                p = sequence.next_pos(p);
            } else {
                p = sequence.next_pos(p);
            }
        }
        for (bigram, corrected) in run_corrected {
            if let Some(entry) = seen.get_mut(&bigram) {
                entry.2 = corrected;
            }
        }

        for (bigram, (first, last, count)) in seen {
            freq_queue.register(&mut bigram_index, bigram, first, last, count);
        }

        let max_f = freq_queue.highest_bucket();
        Self {
            sequence,
            bigram_index,
            freq_queue,
            rules: Vec::new(),
            max_f,
            pending_singletons: AHashMap::default(),
        }
    }

    /// The main replacement loop: pop the highest-frequency bigram and
    /// replace every live occurrence of it with a fresh non-terminal,
    /// fixing up the frequencies of the bigrams that border each
    /// replacement, until no bigram occurs twice.
    fn compress_data(&mut self) {
        while let Some((bigram, first_loc, freq)) =
            self.freq_queue.pop_max(&mut self.bigram_index, &mut self.max_f)
        {
            let rule_index = self.rules.len() as u32;
            self.rules.push(Rule::new(bigram.left.clone(), bigram.right.clone(), freq, rule_index));
            let new_symbol = Symbol::NonTerminal(rule_index);

            let mut occ = first_loc;
            while occ != SENTINEL {
                let next_occ = self.sequence.next_same_bigram(occ);

                if !self.sequence.is_active(occ) || self.sequence.next_pos(occ) == SENTINEL {
                    occ = next_occ;
                    continue;
                }
                if self.sequence.bigram_at(occ) != bigram {
                    // One of this occurrence's two positions was already
                    // consumed by an earlier replacement in this same
                    // sweep (an overlapping run); skip it.
                    occ = next_occ;
                    continue;
                }

                self.replace_occurrence(occ, new_symbol);
                occ = next_occ;
            }
        }
    }

    /// Replaces the bigram starting at `occ` with `new_symbol`, updating
    /// the frequencies (and same-bigram chains) of the bigrams bordering
    /// it on the left and right.
    fn replace_occurrence(&mut self, occ: usize, new_symbol: Symbol<T>) {
        let prev = self.sequence.prev_pos(occ);
        let q = self.sequence.next_pos(occ);
        let after = self.sequence.next_pos(q);

        if after != SENTINEL {
            let old_right = bigram_of(self.sequence.symbol(q).clone(), self.sequence.symbol(after).clone());
            let prev_in_chain = self.sequence.prev_same_bigram(q);
            let next_in_chain = self.sequence.next_same_bigram(q);
            self.freq_queue
                .decrement(&mut self.bigram_index, &old_right, q, prev_in_chain, next_in_chain);
        }

        if prev != SENTINEL {
            let old_left = bigram_of(self.sequence.symbol(prev).clone(), self.sequence.symbol(occ).clone());
            let prev_in_chain = self.sequence.prev_same_bigram(prev);
            let next_in_chain = self.sequence.next_same_bigram(prev);
            self.freq_queue
                .decrement(&mut self.bigram_index, &old_left, prev, prev_in_chain, next_in_chain);
            self.sequence.unlink_same_bigram(prev);
        }

        self.sequence.replace_pair_with_nonterminal(occ, new_symbol);
        // `occ` no longer starts the bigram just replaced; its same-bigram
        // chain pointers from that now-fully-consumed bigram are stale and
        // must not leak into whatever new bigram it starts next.
        self.sequence.unlink_same_bigram(occ);

        if prev != SENTINEL {
            self.form_border_bigram(prev, occ);
        }
        if after != SENTINEL {
            self.form_border_bigram(occ, after);
        }
    }

    /// Registers (or extends) the newly-formed bigram starting at
    /// `left_pos` after a replacement made `left_pos`/`right_pos` adjacent.
    fn form_border_bigram(&mut self, left_pos: usize, right_pos: usize) {
        let bigram = bigram_of(
            self.sequence.symbol(left_pos).clone(),
            self.sequence.symbol(right_pos).clone(),
        );

        if let Some(tail) = self.freq_queue.tail_of(&self.bigram_index, &bigram) {
            self.sequence.link_same_bigram(tail, left_pos);
            self.freq_queue.bump(&mut self.bigram_index, &bigram, left_pos);
            return;
        }

        match self.pending_singletons.get(&bigram).copied() {
            Some(prior) if self.sequence.is_active(prior) && self.sequence.bigram_at_matches(prior, &bigram) => {
                self.sequence.link_same_bigram(prior, left_pos);
                self.freq_queue
                    .register(&mut self.bigram_index, bigram, prior, left_pos, 2);
                self.pending_singletons.remove(&bigram);
            }
            _ => {
                self.pending_singletons.insert(bigram, left_pos);
            }
        }
    }

    /// The rules produced by this compression, in creation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// The current compressed sequence: the active symbols walked in order.
    pub fn compressed_text(&self) -> Vec<Symbol<T>> {
        self.sequence.emit()
    }

    /// Stats about the (already completed) compression.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats {
            input_len: self.sequence.len(),
            compressed_len: self.sequence.emit().len(),
            rule_count: self.rules.len(),
        }
    }

    /// Consumes this compressor, handing ownership of its compressed
    /// sequence and rule list to the caller.
    pub fn into_parts(self) -> (Vec<Symbol<T>>, Vec<Rule<T>>) {
        (self.sequence.emit(), self.rules)
    }
}
