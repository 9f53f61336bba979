//! Earley items and the per-position charts that hold them.

use std::rc::Rc;

use crate::grammar::Symbol;

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;

/// How an item came to be inserted. Trace metadata only: never part of item
/// equality, never consulted by the recognizer. Coordinates are
/// `(chart position, item index)` pairs.
#[derive(Copy, Clone, Debug)]
pub enum Provenance {
    /// The augmented start item placed in chart 0.
    Seed,
    /// Predictor expansion triggered by the item at `by`.
    Predicted { by: (usize, usize) },
    /// Scanner advance of the item at `from`, past a matched terminal.
    Scanned { from: (usize, usize) },
    /// Completer advance: the completed item at `by` let the item waiting
    /// at `waiting` move past its expected nonterminal.
    Completed { by: (usize, usize), waiting: (usize, usize) },
}

/// An Earley item: progress through one production (`dot`) plus the input
/// position where the match began (`origin`). Never mutated after creation;
/// advancing the dot produces a new item.
#[derive(Clone, Debug)]
pub struct Item {
    lhs: Symbol,
    rhs: Rc<[Symbol]>,
    dot: usize,
    origin: usize,
    provenance: Provenance,
}

/// Two items are the same state iff `(lhs, rhs, dot, origin)` agree.
impl PartialEq for Item {
    fn eq(&self, other: &Item) -> bool {
        self.lhs == other.lhs
            && self.rhs == other.rhs
            && self.dot == other.dot
            && self.origin == other.origin
    }
}

impl Eq for Item {}

impl Item {
    /// A fresh item for `lhs -> rhs` with the dot at the far left.
    pub fn new(lhs: Symbol, rhs: Rc<[Symbol]>, origin: usize, provenance: Provenance) -> Item {
        Item { lhs, rhs, dot: 0, origin, provenance }
    }

    /// The same state with the dot moved one symbol to the right.
    pub fn advanced(&self, provenance: Provenance) -> Item {
        debug_assert!(!self.is_complete());
        Item {
            lhs: self.lhs,
            rhs: self.rhs.clone(),
            dot: self.dot + 1,
            origin: self.origin,
            provenance,
        }
    }

    /// The symbol at the dot, or `None` once the production is complete.
    pub fn next(&self) -> Option<Symbol> {
        self.rhs.get(self.dot).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.dot == self.rhs.len()
    }

    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    pub fn dot(&self) -> usize {
        self.dot
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}

/// Every item valid at one input position, in insertion order, with no
/// duplicates under item equality. Grows monotonically during a parse.
#[derive(Debug)]
pub struct Chart {
    position: usize,
    items: Vec<Item>,
}

impl Chart {
    fn new(position: usize) -> Chart {
        Chart { position, items: Vec::new() }
    }

    /// Dedup-insert: a no-op if an equal item is already present (the
    /// incoming provenance is dropped; the first derivation wins). Returns
    /// whether the item was newly added. The index an added item lands at
    /// is stable; provenance coordinates refer to it.
    pub fn add(&mut self, item: Item) -> bool {
        if self.items.contains(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }
}

/// One chart per input position, 0 through N inclusive for an input of
/// length N. Exclusively owned by a single parse invocation.
#[derive(Debug)]
pub struct ChartSet {
    charts: Vec<Chart>,
}

impl ChartSet {
    pub fn new(input_len: usize) -> ChartSet {
        ChartSet { charts: (0..=input_len).map(Chart::new).collect() }
    }

    /// Panics if `index` is outside `0..=N`; that is a programming error,
    /// not a recognition outcome.
    pub fn at(&self, index: usize) -> &Chart {
        &self.charts[index]
    }

    pub fn at_mut(&mut self, index: usize) -> &mut Chart {
        &mut self.charts[index]
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
