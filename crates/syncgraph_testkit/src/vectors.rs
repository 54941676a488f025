//! Golden transit vectors.
//!
//! Each vector pairs a fixture value with the exact JSON text its encoding
//! must produce. Float members encode as `21.0`; decoding also accepts the
//! integer literal `21` that peers without a float type write.

use crate::fixtures::{Complex, DataRecord, Holder, Node, Roster};
use serde::{Deserialize, Serialize};

/// A transit vector that can be shared across implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Fixture type tag the payload belongs to.
    pub type_tag: String,
    /// Expected compact JSON encoding.
    pub json: String,
}

impl TransitVector {
    fn new(id: &str, description: &str, type_tag: &str, json: &str) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            type_tag: type_tag.into(),
            json: json.into(),
        }
    }
}

/// Fixture value a vector was produced from.
#[derive(Debug)]
pub enum VectorSource {
    /// A [`Complex`].
    Complex(Complex),
    /// A [`Holder`].
    Holder(Holder),
    /// A [`Node`] chain.
    Node(Node),
    /// A [`DataRecord`].
    DataRecord(DataRecord),
    /// A [`Roster`].
    Roster(Roster),
}

/// Vectors with the fixture values that produce them.
pub fn transit_vectors() -> Vec<(TransitVector, VectorSource)> {
    vec![
        (
            TransitVector::new(
                "complex_basic",
                "Two primitives in declaration order",
                "Complex",
                r#"[{"prop":"real","value":21.0,"isArray":false},{"prop":"imaginary","value":7.0,"isArray":false}]"#,
            ),
            VectorSource::Complex(Complex::new(21.0, 7.0)),
        ),
        (
            TransitVector::new(
                "holder_nested",
                "Nested object encodes as a nested entry list",
                "Holder",
                r#"[{"prop":"value","value":[{"prop":"real","value":1.0,"isArray":false},{"prop":"imaginary","value":2.0,"isArray":false}],"isArray":false}]"#,
            ),
            VectorSource::Holder(Holder {
                value: Some(Complex::new(1.0, 2.0)),
            }),
        ),
        (
            TransitVector::new(
                "holder_empty",
                "Missing nested object omits the value",
                "Holder",
                r#"[{"prop":"value","isArray":false}]"#,
            ),
            VectorSource::Holder(Holder::default()),
        ),
        (
            TransitVector::new(
                "node_chain",
                "Self-referential chain of two nodes",
                "Node",
                r#"[{"prop":"num","value":1020,"isArray":false},{"prop":"next","value":[{"prop":"num","value":27,"isArray":false},{"prop":"next","isArray":false}],"isArray":false}]"#,
            ),
            VectorSource::Node(Node::chain(&[1020, 27])),
        ),
        (
            TransitVector::new(
                "record_aliased",
                "Aliased property is published under its accessed name; local state is omitted",
                "DataRecord",
                r#"[{"prop":"numval","value":1,"isArray":false},{"prop":"_stringval","value":"hello ","isArray":false},{"prop":"complexVal","value":[{"prop":"real","value":0.0,"isArray":false},{"prop":"imaginary","value":0.0,"isArray":false}],"isArray":false}]"#,
            ),
            VectorSource::DataRecord(DataRecord::default()),
        ),
        (
            TransitVector::new(
                "roster_list",
                "List of nested objects sets isArray",
                "Roster",
                r#"[{"prop":"items","value":[[{"prop":"real","value":1.5,"isArray":false},{"prop":"imaginary","value":-2.0,"isArray":false}]],"isArray":true}]"#,
            ),
            VectorSource::Roster(Roster {
                items: vec![Complex::new(1.5, -2.0)],
            }),
        ),
        (
            TransitVector::new(
                "roster_empty",
                "Empty list is still an array entry",
                "Roster",
                r#"[{"prop":"items","value":[],"isArray":true}]"#,
            ),
            VectorSource::Roster(Roster::default()),
        ),
    ]
}
