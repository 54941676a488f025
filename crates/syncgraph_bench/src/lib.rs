//! Shared inputs for the syncgraph benchmarks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use syncgraph_testkit::{fixture_provider, Complex, DataRecord, Holder, Node, Roster};

/// Returns a roster of `n` distinct complex values.
pub fn roster(n: usize) -> Roster {
    fixture_provider();
    Roster {
        items: (0..n)
            .map(|i| Complex::new(i as f64, -(i as f64) / 2.0))
            .collect(),
    }
}

/// Returns a node chain of `len` nodes.
pub fn chain(len: usize) -> Node {
    fixture_provider();
    let values: Vec<i64> = (0..len as i64).collect();
    Node::chain(&values)
}

/// Returns a holder with a nested value.
pub fn holder() -> Holder {
    fixture_provider();
    Holder {
        value: Some(Complex::new(1.0, 2.0)),
    }
}

/// Returns a record with every synced field populated.
pub fn record() -> DataRecord {
    fixture_provider();
    DataRecord::new(1020, "benchmark", Some(Complex::new(3.0, 4.0)), "local")
}
