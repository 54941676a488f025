//! Property-based test generators using proptest.
//!
//! Numbers are drawn so that they survive a JSON text round trip exactly.

use crate::fixtures::{Complex, DataRecord, Holder, Node, Roster};
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for floats that print and parse back to the same bits.
pub fn exact_float_strategy() -> impl Strategy<Value = f64> {
    (-1_000_000i32..1_000_000).prop_map(|n| f64::from(n) / 8.0)
}

/// Strategy for [`Complex`] values.
pub fn complex_strategy() -> impl Strategy<Value = Complex> {
    (exact_float_strategy(), exact_float_strategy())
        .prop_map(|(real, imaginary)| Complex::new(real, imaginary))
}

/// Strategy for [`Holder`] values, with and without a nested value.
pub fn holder_strategy() -> impl Strategy<Value = Holder> {
    prop::option::of(complex_strategy()).prop_map(|value| Holder { value })
}

/// Strategy for [`Node`] chains of 1 to `max_len` nodes.
pub fn node_chain_strategy(max_len: usize) -> impl Strategy<Value = Node> {
    prop::collection::vec(any::<i64>(), 1..=max_len.max(1)).prop_map(|values| Node::chain(&values))
}

/// Strategy for [`Roster`] values with up to `max_items` entries.
pub fn roster_strategy(max_items: usize) -> impl Strategy<Value = Roster> {
    prop::collection::vec(complex_strategy(), 0..=max_items).prop_map(|items| Roster { items })
}

/// Strategy for [`DataRecord`] values. The local-only `val` is randomized too.
pub fn data_record_strategy() -> impl Strategy<Value = DataRecord> {
    (
        any::<i64>(),
        "[a-zA-Z0-9 ]{0,24}",
        prop::option::of(complex_strategy()),
        "[a-z]{0,12}",
    )
        .prop_map(|(numval, stringval, complex_val, val)| {
            DataRecord::new(numval, stringval, complex_val, val)
        })
}

/// Strategy for JSON values that are not nested sync structures.
pub fn json_primitive_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,16}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
