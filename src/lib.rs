//! Earley chart recognition for context-free grammars.
//!
//! [`recognize`] answers a single question: does the input derive from the
//! grammar's start symbol? The sweep is a dynamic program over input
//! positions, so it copes with ambiguity and left recursion without
//! backtracking. No parse tree or forest is built; the answer is a
//! [`Verdict`], nothing more.

mod chart;
mod display;
mod grammar;
mod recognizer;
mod trace;

pub use chart::{Chart, ChartSet, Item, Provenance};
pub use grammar::{symbols, Grammar, GrammarSyntaxError, Symbol, UnknownNonterminal};
pub use recognizer::{recognize, Recognizer, Verdict};
pub use trace::{Observer, TraceObserver};
