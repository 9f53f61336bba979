//! Optional narration of the sweep, item by item.

use std::fmt::Write as _;

use crate::chart::Item;
use crate::display::spelled;
use crate::grammar::Symbol;

/// Receives a narration of the sweep. Purely observational: an
/// implementation cannot influence which items exist or the final verdict.
pub trait Observer {
    /// Chart `position` is about to be swept to its fixpoint.
    fn chart_started(&mut self, position: usize, input: &[Symbol]) {
        let _ = (position, input);
    }

    /// The sweep cursor reached the item at `index` within chart
    /// `position`. Fires exactly once per item, in insertion order.
    fn item_visited(&mut self, position: usize, index: usize, item: &Item) {
        let _ = (position, index, item);
    }
}

/// The do-nothing observer.
impl Observer for () {}

/// Renders the classic step-by-step narration into an owned string:
///
/// ```text
/// S(0) .(x;x);x
/// 0 - @ -> .S, origin=0 [seed]
/// 1 - S -> .A, origin=0 [predicted from S(0)(0)]
/// ...
/// ```
#[derive(Default)]
pub struct TraceObserver {
    out: String,
}

impl TraceObserver {
    pub fn new() -> TraceObserver {
        TraceObserver::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Observer for TraceObserver {
    fn chart_started(&mut self, position: usize, input: &[Symbol]) {
        let _ = writeln!(
            self.out,
            "S({}) {}.{}",
            position,
            spelled(&input[..position]),
            spelled(&input[position..]),
        );
    }

    fn item_visited(&mut self, _position: usize, index: usize, item: &Item) {
        let _ = writeln!(self.out, "{} - {} [{}]", index, item, item.provenance());
    }
}
