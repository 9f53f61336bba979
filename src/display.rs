use std::fmt;

use crate::chart::{Item, Provenance};
use crate::grammar::{Grammar, Symbol};

/// The symbols of `syms` spelled out back to back, e.g. `(x;x);x`.
pub(crate) fn spelled(syms: &[Symbol]) -> String {
    syms.iter().map(|sym| sym.to_string()).collect()
}

impl fmt::Display for Item {
    fn fmt(&self, w: &mut fmt::Formatter) -> fmt::Result {
        write!(
            w,
            "{} -> {}.{}, origin={}",
            self.lhs(),
            spelled(&self.rhs()[..self.dot()]),
            spelled(&self.rhs()[self.dot()..]),
            self.origin(),
        )
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, w: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Provenance::Seed => write!(w, "seed"),
            Provenance::Predicted { by: (c, i) } => {
                write!(w, "predicted from S({})({})", c, i)
            }
            Provenance::Scanned { from: (c, i) } => {
                write!(w, "scanned from S({})({})", c, i)
            }
            Provenance::Completed { by: (c, i), waiting: (wc, wi) } => {
                write!(w, "completed from S({})({}) and S({})({})", c, i, wc, wi)
            }
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, w: &mut fmt::Formatter) -> fmt::Result {
        for (lhs, alternatives) in self.rules() {
            let alts: Vec<String> = alternatives.iter().map(|rhs| spelled(rhs)).collect();
            writeln!(w, "{} -> {}", lhs, alts.join(" | "))?;
        }
        Ok(())
    }
}
