// This is actually defined at `crate::chart::tests_for_chart`

use super::*;
use crate::grammar::{symbols, Symbol};

fn item(lhs: char, rhs: &str, dot: usize, origin: usize) -> Item {
    let mut it = Item::new(Symbol::Atom(lhs), symbols(rhs).into(), origin, Provenance::Seed);
    for _ in 0..dot {
        it = it.advanced(Provenance::Scanned { from: (0, 0) });
    }
    it
}

#[test]
fn dot_walks_the_right_hand_side() {
    let it = item('A', "ab", 0, 0);
    assert_eq!(it.next(), Some(Symbol::Atom('a')));
    assert!(!it.is_complete());

    let it = it.advanced(Provenance::Scanned { from: (0, 0) });
    assert_eq!(it.next(), Some(Symbol::Atom('b')));
    assert_eq!(it.dot(), 1);

    let it = it.advanced(Provenance::Scanned { from: (1, 0) });
    assert!(it.is_complete());
    assert_eq!(it.next(), None);
}

#[test]
fn equality_is_over_state_not_provenance() {
    let a = item('A', "ab", 1, 0);
    let mut b = item('A', "ab", 0, 0).advanced(Provenance::Predicted { by: (3, 7) });
    assert_eq!(a, b);

    b = item('A', "ab", 1, 2);
    assert_ne!(a, b, "origin is part of the state");
    assert_ne!(a, item('A', "ab", 2, 0), "so is the dot");
    assert_ne!(a, item('B', "ab", 1, 0), "and the lhs");
    assert_ne!(a, item('A', "ac", 1, 0), "and the rhs");
}

#[test]
fn add_deduplicates_and_keeps_first_provenance() {
    let mut chart = Chart::new(0);
    assert!(chart.add(item('A', "ab", 0, 0)));
    assert!(!chart.add(item('A', "ab", 0, 0)));
    // an equal state with different provenance is still a duplicate
    let dup = item('A', "ab", 0, 0);
    let dup = Item::new(dup.lhs(), dup.rhs().into(), dup.origin(), Provenance::Predicted {
        by: (0, 9),
    });
    assert!(!chart.add(dup));
    assert_eq!(chart.len(), 1);
    assert!(matches!(chart.get(0).provenance(), Provenance::Seed));
}

#[test]
fn insertion_order_is_stable() {
    let mut chart = Chart::new(2);
    chart.add(item('A', "ab", 0, 0));
    chart.add(item('B', "c", 0, 1));
    chart.add(item('A', "ab", 1, 0));
    assert_eq!(chart.position(), 2);
    assert_eq!(chart.len(), 3);
    assert_eq!(*chart.get(0), item('A', "ab", 0, 0));
    assert_eq!(*chart.get(1), item('B', "c", 0, 1));
    assert_eq!(*chart.get(2), item('A', "ab", 1, 0));
}

#[test]
fn chart_set_spans_zero_through_input_length() {
    let charts = ChartSet::new(3);
    assert_eq!(charts.len(), 4);
    for i in 0..4 {
        assert_eq!(charts.at(i).position(), i);
        assert!(charts.at(i).is_empty());
    }

    // the empty input still gets its one chart
    assert_eq!(ChartSet::new(0).len(), 1);
}

#[test]
#[should_panic]
fn chart_access_out_of_range_is_fatal() {
    let charts = ChartSet::new(1);
    let _ = charts.at(5);
}
