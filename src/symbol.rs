//! The tagged-union symbol model and ordered bigrams built from it.
//!
//! A [`Symbol`] is either a `Terminal` carrying a caller-supplied alphabet
//! value or a `NonTerminal` referencing a rule by index. The two cases are
//! disjoint for equality, ordering and hashing purposes even when a
//! terminal's payload and a non-terminal's index happen to coincide
//! numerically.

use std::hash::{Hash, Hasher};

/// A symbol appearing in the sequence being compressed: either a literal
/// value from the caller's alphabet, or a reference to a previously created
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol<T> {
    /// A literal value from the input alphabet.
    Terminal(T),
    /// A reference to `rules[i]`, zero-based.
    NonTerminal(u32),
}

impl<T> Symbol<T> {
    /// True iff this is a `Terminal`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// True iff this is a `NonTerminal`.
    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    /// The wrapped terminal value, or `None` if this is a non-terminal.
    pub fn value_of_terminal(&self) -> Option<&T> {
        match self {
            Symbol::Terminal(v) => Some(v),
            Symbol::NonTerminal(_) => None,
        }
    }

    /// The rule index, or `None` if this is a terminal.
    pub fn index_of_nonterminal(&self) -> Option<u32> {
        match self {
            Symbol::NonTerminal(i) => Some(*i),
            Symbol::Terminal(_) => None,
        }
    }
}

/// An ordered pair of adjacent symbols.
///
/// Two bigrams are equal iff both components are equal; a `Terminal` and a
/// `NonTerminal` never compare equal regardless of payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bigram<T> {
    pub left: Symbol<T>,
    pub right: Symbol<T>,
}

impl<T: Hash> Hash for Bigram<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.left.hash(state);
        self.right.hash(state);
    }
}

/// Builds the bigram `(left, right)`.
pub fn bigram_of<T>(left: Symbol<T>, right: Symbol<T>) -> Bigram<T> {
    Bigram { left, right }
}

impl<T: PartialEq> Bigram<T> {
    /// True iff the two halves of the bigram are equal, i.e. it is an `XX`
    /// pair participating in a same-symbol run.
    pub fn equal_parts(&self) -> bool {
        self.left == self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn terminal_and_nonterminal_are_disjoint() {
        let t = Symbol::<u32>::Terminal(5);
        let n = Symbol::<u32>::NonTerminal(5);
        assert_ne!(t, n);
        assert!(t.is_terminal());
        assert!(!t.is_nonterminal());
        assert!(n.is_nonterminal());
        assert!(!n.is_terminal());
    }

    #[test]
    fn accessors_round_trip() {
        let t = Symbol::Terminal('a');
        assert_eq!(t.value_of_terminal(), Some(&'a'));
        assert_eq!(t.index_of_nonterminal(), None);

        let n = Symbol::<char>::NonTerminal(3);
        assert_eq!(n.index_of_nonterminal(), Some(3));
        assert_eq!(n.value_of_terminal(), None);
    }

    #[test]
    fn bigram_equality_and_equal_parts() {
        let a = bigram_of(Symbol::Terminal('x'), Symbol::Terminal('x'));
        let b = bigram_of(Symbol::Terminal('x'), Symbol::Terminal('y'));
        assert!(a.equal_parts());
        assert!(!b.equal_parts());
        assert_ne!(a, b);
        assert_eq!(a, bigram_of(Symbol::Terminal('x'), Symbol::Terminal('x')));
    }

    #[test]
    fn hash_distinguishes_terminal_from_nonterminal() {
        let t = Symbol::<u32>::Terminal(7);
        let n = Symbol::<u32>::NonTerminal(7);
        // Not a strict requirement in general, but this encoding must not
        // collapse the two tags onto the same stream.
        assert_ne!(hash_of(&t), hash_of(&n));
    }
}
