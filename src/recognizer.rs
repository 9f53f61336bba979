//! The predictor/scanner/completer fixpoint sweep.

use derive_more::Display;

use crate::chart::{ChartSet, Item, Provenance};
use crate::grammar::{Grammar, Symbol, UnknownNonterminal};
use crate::trace::Observer;

#[cfg(test)]
#[path = "tests/recognizer.rs"]
mod tests_for_recognizer;

/// The outcome of a successful recognition run. `Rejected` is a valid
/// verdict ("no derivation exists"), not an error.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum Verdict {
    #[display(fmt = "Accepted")]
    Accepted,
    #[display(fmt = "Rejected")]
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

/// Whether `input` derives from the start symbol of `grammar`.
pub fn recognize(grammar: &Grammar, input: &[Symbol]) -> Result<Verdict, UnknownNonterminal> {
    Recognizer::new(grammar).recognize(input)
}

/// Drives the sweep over the charts for one grammar.
pub struct Recognizer<'g> {
    grammar: &'g Grammar,
}

impl<'g> Recognizer<'g> {
    pub fn new(grammar: &'g Grammar) -> Recognizer<'g> {
        Recognizer { grammar }
    }

    pub fn recognize(&self, input: &[Symbol]) -> Result<Verdict, UnknownNonterminal> {
        self.recognize_observed(input, &mut ())
    }

    /// As [`Recognizer::recognize`], narrating every chart entry and item
    /// visit to `observer`. Observation cannot change the verdict.
    pub fn recognize_observed(
        &self,
        input: &[Symbol],
        observer: &mut dyn Observer,
    ) -> Result<Verdict, UnknownNonterminal> {
        let mut charts = ChartSet::new(input.len());
        charts.at_mut(0).add(self.seed());

        for i in 0..charts.len() {
            observer.chart_started(i, input);
            // Chart i grows underneath this cursor: predictor and completer
            // insert into the chart being swept, and every such item must
            // itself be visited before the sweep moves on. Re-reading len()
            // each iteration is what drives the chart to its fixpoint; a
            // snapshot iterator here would under-recognize.
            let mut cursor = 0;
            while cursor < charts.at(i).len() {
                let item = charts.at(i).get(cursor).clone();
                observer.item_visited(i, cursor, &item);
                match item.next() {
                    None => self.completer(&mut charts, &item, (i, cursor)),
                    Some(sym) if self.grammar.is_terminal(sym) => {
                        self.scanner(&mut charts, &item, (i, cursor), input)
                    }
                    Some(sym) => self.predictor(&mut charts, sym, (i, cursor))?,
                }
                cursor += 1;
            }
        }

        let witness = self.seed().advanced(Provenance::Seed);
        if charts.at(input.len()).contains(&witness) {
            Ok(Verdict::Accepted)
        } else {
            Ok(Verdict::Rejected)
        }
    }

    /// The augmented start item `@ -> .S, origin=0`. Its `Start` left-hand
    /// side is outside the grammar's alphabet, so acceptance reduces to
    /// finding this item with the dot advanced in the final chart.
    fn seed(&self) -> Item {
        let rhs = vec![self.grammar.start()];
        Item::new(Symbol::Start, rhs.into(), 0, Provenance::Seed)
    }

    /// `item` is complete: it proves an `item.lhs()` derivation spanning
    /// `[origin, i)`. Every item in chart `origin` that was waiting on that
    /// nonterminal advances past it, into the current chart.
    fn completer(&self, charts: &mut ChartSet, item: &Item, at: (usize, usize)) {
        let origin = item.origin();
        // Without epsilon productions a completed item spans at least one
        // token, so `origin < at.0` and chart `origin` can no longer grow;
        // collecting from it first is exact, not an approximation.
        let advanced: Vec<Item> = charts
            .at(origin)
            .items()
            .iter()
            .enumerate()
            .filter(|(_, waiting)| waiting.next() == Some(item.lhs()))
            .map(|(index, waiting)| {
                waiting.advanced(Provenance::Completed { by: at, waiting: (origin, index) })
            })
            .collect();
        for new in advanced {
            charts.at_mut(at.0).add(new);
        }
    }

    /// If the input token at the current position matches the expected
    /// terminal, the advanced item lands in the next chart. Past the end of
    /// input, or on a mismatch, the scanner produces nothing; that is an
    /// ordinary non-match, not an error.
    fn scanner(&self, charts: &mut ChartSet, item: &Item, at: (usize, usize), input: &[Symbol]) {
        if input.get(at.0).copied() == item.next() {
            let new = item.advanced(Provenance::Scanned { from: at });
            charts.at_mut(at.0 + 1).add(new);
        }
    }

    /// Expands an expected nonterminal: one fresh dot-at-zero item per
    /// declared alternative, originating at the current position.
    fn predictor(
        &self,
        charts: &mut ChartSet,
        nonterminal: Symbol,
        at: (usize, usize),
    ) -> Result<(), UnknownNonterminal> {
        for rhs in self.grammar.alternatives_of(nonterminal)? {
            let item =
                Item::new(nonterminal, rhs.clone(), at.0, Provenance::Predicted { by: at });
            charts.at_mut(at.0).add(item);
        }
        Ok(())
    }
}
