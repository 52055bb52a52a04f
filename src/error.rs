//! Errors returned by [`decompress`](crate::decompress::decompress).

use thiserror::Error;

/// Why expanding a compressed sequence against a rule list failed.
///
/// `compress` itself is infallible: these can only arise when `decompress`
/// is handed a rule list it did not produce itself, e.g. one deserialized
/// from an untrusted source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecompressError {
    /// A symbol referenced rule `index`, but `rules` only has `rule_count`
    /// entries.
    #[error("symbol references rule {index}, but only {rule_count} rules exist")]
    UndefinedRule { index: u32, rule_count: usize },

    /// Rule `rule_index`'s right-hand side references a rule with an index
    /// `>= rule_index`, so expanding it can never terminate by recursion.
    #[error("rule {rule_index} is not well-founded: its right-hand side references a rule that is not strictly earlier")]
    NotWellFounded { rule_index: u32 },
}
