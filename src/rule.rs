//! Production rules: `A_i -> left right`, append-only, created in the order
//! the main loop replaces bigrams.

use crate::symbol::Symbol;

/// A single production rule, `rule_index -> (left, right)`.
///
/// `rule_index` always equals the rule's position in the owning `Vec<Rule<T>>`
/// at the moment of creation; rules are never reordered or mutated after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<T> {
    pub left: Symbol<T>,
    pub right: Symbol<T>,
    /// The bigram's frequency at the moment this rule replaced it.
    pub freq_at_creation: u32,
    pub rule_index: u32,
}

impl<T> Rule<T> {
    pub(crate) fn new(
        left: Symbol<T>,
        right: Symbol<T>,
        freq_at_creation: u32,
        rule_index: u32,
    ) -> Self {
        Self {
            left,
            right,
            freq_at_creation,
            rule_index,
        }
    }

    /// True iff every non-terminal on this rule's right-hand side has an
    /// index strictly less than `self.rule_index` — the well-foundedness
    /// invariant that lets `decompress` terminate by simple recursion.
    pub fn is_well_founded_given(&self, rule_index: u32) -> bool {
        [self.left, self.right]
            .iter()
            .filter_map(Symbol::index_of_nonterminal)
            .all(|i| i < rule_index)
    }
}

/// Checks well-foundedness across an entire rule list: rule `i`'s
/// right-hand side may only reference rules with index `< i`.
pub fn rules_are_well_founded<T>(rules: &[Rule<T>]) -> bool {
    rules.iter().enumerate().all(|(i, rule)| {
        debug_assert_eq!(rule.rule_index as usize, i);
        rule.is_well_founded_given(i as u32)
    })
}
