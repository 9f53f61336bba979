//! The grammar representation: an immutable mapping from each nonterminal
//! to its ordered list of right-hand-side alternatives, plus the line-based
//! rule-text loader.

use std::rc::Rc;

use derive_more::{Display, From};
use linear_map::LinearMap;
use regex::Regex;
use thiserror::Error;

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;

/// A single symbol of a grammar's alphabet.
///
/// A symbol is terminal iff it never appears as the left-hand side of a
/// production. `Start` is the synthetic left-hand side of the recognizer's
/// augmented seed item; it belongs to no grammar's alphabet, so it cannot
/// collide with a declared nonterminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, From)]
pub enum Symbol {
    #[display(fmt = "{}", _0)]
    Atom(char),
    #[display(fmt = "@")]
    #[from(ignore)]
    Start,
}

/// The symbol sequence spelled by `s`, one atom per character.
pub fn symbols(s: &str) -> Vec<Symbol> {
    s.chars().map(Symbol::Atom).collect()
}

/// A rule declaration the loader could not split into a left-hand side and
/// at least one non-empty alternative.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum GrammarSyntaxError {
    #[error("line {line}: expected `X -> alternatives`, got `{text}`")]
    MalformedDeclaration { line: usize, text: String },
    #[error("line {line}: empty alternative in the rule for `{lhs}`")]
    EmptyAlternative { line: usize, lhs: Symbol },
    #[error("no rule declarations found")]
    Empty,
}

/// Alternatives were requested for a symbol that has none recorded. Only a
/// grammar with a dangling nonterminal reference can get here; the parse in
/// progress is abandoned rather than yielding a best-effort verdict.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("no alternatives recorded for nonterminal `{0}`")]
pub struct UnknownNonterminal(pub Symbol);

/// A context-free grammar: each nonterminal maps to its right-hand-side
/// alternatives, in declaration order.
///
/// Built once, then shared read-only by every parse.
#[derive(Debug)]
pub struct Grammar {
    start: Symbol,
    alternatives: LinearMap<Symbol, Vec<Rc<[Symbol]>>>,
}

impl Grammar {
    pub fn new(start: Symbol) -> Grammar {
        Grammar { start, alternatives: LinearMap::new() }
    }

    /// Loads a grammar from rule text, one declaration per line:
    ///
    /// ```text
    /// S -> A
    /// A -> (L) | x
    /// L -> A | L;A
    /// ```
    ///
    /// Symbols are single characters, spaces are insignificant, blank lines
    /// are skipped. The first declared left-hand side becomes the start
    /// symbol. Repeated declarations of one left-hand side concatenate
    /// their alternatives in declaration order.
    pub fn parse(text: &str) -> Result<Grammar, GrammarSyntaxError> {
        let decl = Regex::new(r"^\s*(\S)\s*->(.*)$").unwrap();
        let mut grammar: Option<Grammar> = None;

        for (number, raw) in text.lines().enumerate() {
            let line = number + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let caps = decl.captures(raw).ok_or_else(|| {
                GrammarSyntaxError::MalformedDeclaration { line, text: raw.trim().to_string() }
            })?;
            // the first capture is exactly one character wide
            let lhs = Symbol::Atom(caps[1].chars().next().unwrap());
            let grammar = grammar.get_or_insert_with(|| Grammar::new(lhs));
            for alt in caps[2].split('|') {
                let rhs: Vec<Symbol> = alt
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Symbol::Atom)
                    .collect();
                if rhs.is_empty() {
                    return Err(GrammarSyntaxError::EmptyAlternative { line, lhs });
                }
                grammar.add_rule(lhs, rhs);
            }
        }

        grammar.ok_or(GrammarSyntaxError::Empty)
    }

    /// The designated start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Records one more alternative for `lhs`, after any already declared.
    ///
    /// Panics on an empty right-hand side; epsilon productions are not
    /// supported.
    pub fn add_rule(&mut self, lhs: Symbol, rhs: Vec<Symbol>) {
        assert!(!rhs.is_empty(), "empty right-hand side for `{}`", lhs);
        let rhs: Rc<[Symbol]> = rhs.into();
        match self.alternatives.get_mut(&lhs) {
            Some(alts) => alts.push(rhs),
            None => {
                self.alternatives.insert(lhs, vec![rhs]);
            }
        }
    }

    /// A symbol is terminal iff no production declares it as a left-hand
    /// side.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !self.alternatives.contains_key(&sym)
    }

    /// The declared alternatives of `sym`, in declaration order. Callers
    /// must rule out `is_terminal(sym)` first.
    pub fn alternatives_of(&self, sym: Symbol) -> Result<&[Rc<[Symbol]>], UnknownNonterminal> {
        self.alternatives
            .get(&sym)
            .map(|alts| alts.as_slice())
            .ok_or(UnknownNonterminal(sym))
    }

    pub(crate) fn rules(&self) -> impl Iterator<Item = (Symbol, &[Rc<[Symbol]>])> {
        self.alternatives.iter().map(|(lhs, alts)| (*lhs, alts.as_slice()))
    }
}
