//! Expands a compressed sequence back into the original input by resolving
//! every non-terminal against its rule, recursively.
//!
//! Grounded in the teacher crate's iterator-based rule resolution
//! (`repair_iter.rs`'s `resolve_forward`): rather than recursing with the
//! call stack, each symbol to expand is pushed onto an explicit stack so
//! that a pathologically deep rule nesting cannot blow it.

use crate::error::DecompressError;
use crate::rule::Rule;
use crate::symbol::Symbol;

/// Reconstructs the original sequence of terminals from `compressed` and
/// the `rules` that produced it.
///
/// Validates every rule reference up front: an out-of-range or
/// not-strictly-earlier non-terminal index is reported as an error rather
/// than panicking or silently truncating. No partial output is returned on
/// failure.
pub fn decompress<T: Clone>(
    compressed: &[Symbol<T>],
    rules: &[Rule<T>],
) -> Result<Vec<T>, DecompressError> {
    validate_rules(rules)?;
    for s in compressed {
        check_reference(s, rules.len())?;
    }

    let mut out = Vec::new();
    // Stack of symbols still to expand, processed right-to-left so that
    // popping yields them in original left-to-right order.
    let mut stack: Vec<Symbol<T>> = compressed.iter().rev().cloned().collect();

    while let Some(sym) = stack.pop() {
        match sym {
            Symbol::Terminal(v) => out.push(v),
            Symbol::NonTerminal(i) => {
                let rule = &rules[i as usize];
                stack.push(rule.right.clone());
                stack.push(rule.left.clone());
            }
        }
    }

    Ok(out)
}

fn validate_rules<T>(rules: &[Rule<T>]) -> Result<(), DecompressError> {
    for (i, rule) in rules.iter().enumerate() {
        let idx = i as u32;
        check_reference(&rule.left, i)?;
        check_reference(&rule.right, i)?;
        if !rule.is_well_founded_given(idx) {
            return Err(DecompressError::NotWellFounded { rule_index: idx });
        }
    }
    Ok(())
}

fn check_reference<T>(sym: &Symbol<T>, rule_count: usize) -> Result<(), DecompressError> {
    if let Symbol::NonTerminal(i) = sym {
        if *i as usize >= rule_count {
            return Err(DecompressError::UndefinedRule {
                index: *i,
                rule_count,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompress_with_no_rules_is_identity() {
        let compressed = vec![Symbol::Terminal('a'), Symbol::Terminal('b')];
        let rules: Vec<Rule<char>> = vec![];
        assert_eq!(decompress(&compressed, &rules).unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn decompress_expands_a_single_rule() {
        let rules = vec![Rule::new(Symbol::Terminal('a'), Symbol::Terminal('a'), 2, 0)];
        let compressed = vec![Symbol::NonTerminal(0), Symbol::Terminal('b')];
        assert_eq!(decompress(&compressed, &rules).unwrap(), vec!['a', 'a', 'b']);
    }

    #[test]
    fn decompress_expands_nested_rules() {
        let rules = vec![
            Rule::new(Symbol::Terminal('a'), Symbol::Terminal('a'), 2, 0),
            Rule::new(Symbol::NonTerminal(0), Symbol::NonTerminal(0), 2, 1),
        ];
        let compressed = vec![Symbol::NonTerminal(1)];
        assert_eq!(decompress(&compressed, &rules).unwrap(), vec!['a', 'a', 'a', 'a']);
    }

    #[test]
    fn undefined_rule_reference_is_reported() {
        let rules: Vec<Rule<char>> = vec![];
        let compressed = vec![Symbol::NonTerminal(0)];
        assert_eq!(
            decompress(&compressed, &rules),
            Err(DecompressError::UndefinedRule {
                index: 0,
                rule_count: 0
            })
        );
    }

    #[test]
    fn self_referential_rule_is_rejected_as_not_well_founded() {
        let rules = vec![Rule::new(Symbol::NonTerminal(0), Symbol::Terminal('a'), 2, 0)];
        let compressed = vec![Symbol::NonTerminal(0)];
        assert_eq!(
            decompress(&compressed, &rules),
            Err(DecompressError::NotWellFounded { rule_index: 0 })
        );
    }

    #[test]
    fn forward_referencing_rule_is_rejected() {
        let rules = vec![
            Rule::new(Symbol::NonTerminal(1), Symbol::Terminal('a'), 2, 0),
            Rule::new(Symbol::Terminal('b'), Symbol::Terminal('c'), 2, 1),
        ];
        let compressed = vec![Symbol::NonTerminal(0)];
        assert_eq!(
            decompress(&compressed, &rules),
            Err(DecompressError::NotWellFounded { rule_index: 0 })
        );
    }
}
