//! Fixture types and the shared provider they are registered with.
//!
//! The types mirror the shapes the engine has to handle: flat primitives
//! ([`Complex`]), a nested object ([`Holder`]), a self-referential chain
//! ([`Node`]), aliased and unsynced properties ([`DataRecord`]) and a list of
//! nested objects ([`Roster`]).
//!
//! Nested decode needs a provider, so call [`fixture_provider`] (or build
//! instances with [`fresh`]) before decoding.

use std::sync::{LazyLock, OnceLock};
use syncgraph_codec::SyncData;
use syncgraph_core::{
    late_bind, sync_to, FieldRef, FieldValue, SyncError, SyncFlag, SyncProvider, SyncResult,
    SyncType, Syncable, TypeSchema,
};

/// Returns the provider every fixture type is registered with.
pub fn fixture_provider() -> &'static SyncProvider {
    static PROVIDER: LazyLock<SyncProvider> = LazyLock::new(|| {
        let provider = SyncProvider::new();
        provider.register::<Complex>().expect("Complex is syncable");
        provider.register::<Holder>().expect("Holder is syncable");
        provider.register::<Node>().expect("Node is syncable");
        provider.register::<DataRecord>().expect("DataRecord is syncable");
        provider.register::<Roster>().expect("Roster is syncable");
        provider
    });
    &PROVIDER
}

/// Creates a default `T` after making sure the fixtures are registered.
pub fn fresh<T: SyncType>() -> T {
    fixture_provider();
    T::default()
}

/// A complex number with both parts synced as primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Complex {
    /// Real part.
    pub real: f64,
    /// Imaginary part.
    pub imaginary: f64,
}

impl Complex {
    /// Creates a complex number.
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

impl Syncable for Complex {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "real" => FieldRef::primitive(&self.real),
            "imaginary" => FieldRef::primitive(&self.imaginary),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "real" => self.real = value.into_primitive(prop)?,
            "imaginary" => self.imaginary = value.into_primitive(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }

    fn check_field(&self, prop: &str, value: &FieldValue) -> SyncResult<()> {
        match prop {
            "real" | "imaginary" => value.check_primitive::<f64>(prop),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }
}

impl SyncType for Complex {
    const TYPE_TAG: &'static str = "Complex";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .primitive("real")
                .primitive("imaginary")
                .build()
        })
    }
}

/// Holds one nested [`Complex`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Holder {
    /// The nested value.
    pub value: Option<Complex>,
}

impl Syncable for Holder {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "value" => Ok(FieldRef::optional(self.value.as_ref())),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "value" => self.value = value.into_object(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }
}

impl SyncType for Holder {
    const TYPE_TAG: &'static str = "Holder";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .nested::<Complex>("value")
                .build()
        })
    }
}

/// A singly linked node whose `next` member refers to its own type.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Payload.
    pub num: i64,
    /// Following node.
    pub next: Option<Box<Node>>,
}

impl Node {
    /// Builds a chain holding `values` in order. Empty input gives a single
    /// node with `num == 0`.
    pub fn chain(values: &[i64]) -> Self {
        let mut next = None;
        for &num in values.iter().skip(1).rev() {
            next = Some(Box::new(Node { num, next }));
        }
        let head = Node {
            num: values.first().copied().unwrap_or_default(),
            next,
        };
        late_bind::<Node, _>(&head, "next").expect("next is declared late-bound");
        head
    }

    /// Collects the payloads along the chain.
    pub fn values(&self) -> Vec<i64> {
        let mut values = vec![self.num];
        let mut cursor = self.next.as_deref();
        while let Some(node) = cursor {
            values.push(node.num);
            cursor = node.next.as_deref();
        }
        values
    }
}

impl Default for Node {
    fn default() -> Self {
        let node = Self { num: 0, next: None };
        late_bind::<Node, _>(&node, "next").expect("next is declared late-bound");
        node
    }
}

impl Syncable for Node {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "num" => FieldRef::primitive(&self.num),
            "next" => Ok(FieldRef::optional(self.next.as_deref())),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "num" => self.num = value.into_primitive(prop)?,
            "next" => self.next = value.into_boxed(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }

    fn check_field(&self, prop: &str, value: &FieldValue) -> SyncResult<()> {
        match prop {
            "num" => value.check_primitive::<i64>(prop),
            _ => Ok(()),
        }
    }
}

impl SyncType for Node {
    const TYPE_TAG: &'static str = "Node";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .primitive("num")
                .late_bind("next")
                .build()
        })
    }
}

/// A record mixing synced, aliased and local-only state.
///
/// `stringval` is published under its own name but stored in the `_stringval`
/// property; `val` is never synced. `summary` is derived from the synced
/// fields and is rebuilt once per decode rather than once per field.
#[derive(Debug)]
pub struct DataRecord {
    /// Synced number.
    pub numval: i64,
    /// Synced string, accessed as `_stringval`.
    pub stringval: String,
    /// Synced nested value, published as `complexVal`.
    pub complex_val: Option<Complex>,
    /// Local-only value.
    pub val: String,
    summary: String,
    summary_builds: usize,
    flag: SyncFlag,
}

impl DataRecord {
    /// Creates a record with the given state.
    pub fn new(
        numval: i64,
        stringval: impl Into<String>,
        complex_val: Option<Complex>,
        val: impl Into<String>,
    ) -> Self {
        let mut record = Self {
            numval,
            stringval: stringval.into(),
            complex_val,
            val: val.into(),
            summary: String::new(),
            summary_builds: 0,
            flag: SyncFlag::new(),
        };
        record.rebuild_summary();
        record
    }

    /// Sets `numval`, rebuilding the summary unless a decode is in flight.
    pub fn set_numval(&mut self, numval: i64) {
        self.numval = numval;
        if !self.is_sync_in_progress() {
            self.rebuild_summary();
        }
    }

    /// Returns the derived summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns how many times the summary was rebuilt.
    pub fn summary_builds(&self) -> usize {
        self.summary_builds
    }

    fn rebuild_summary(&mut self) {
        self.summary = format!("{}{}", self.stringval, self.numval);
        self.summary_builds += 1;
    }
}

impl Default for DataRecord {
    fn default() -> Self {
        Self::new(1, "hello ", Some(Complex::default()), "dont sync this")
    }
}

impl Syncable for DataRecord {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "numval" => FieldRef::primitive(&self.numval),
            "_stringval" => FieldRef::primitive(&self.stringval),
            "complexVal" => Ok(FieldRef::optional(self.complex_val.as_ref())),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "numval" => self.set_numval(value.into_primitive(prop)?),
            "_stringval" => self.stringval = value.into_primitive(prop)?,
            "complexVal" => self.complex_val = value.into_object(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }

    fn check_field(&self, prop: &str, value: &FieldValue) -> SyncResult<()> {
        match prop {
            "numval" => value.check_primitive::<i64>(prop),
            "_stringval" => value.check_primitive::<String>(prop),
            _ => Ok(()),
        }
    }

    fn sync_flag(&self) -> Option<&SyncFlag> {
        Some(&self.flag)
    }

    fn sync_from(&mut self, data: &SyncData) -> SyncResult<()> {
        self.flag.enter();
        let result = sync_to(self, data);
        self.flag.exit();
        self.rebuild_summary();
        result
    }
}

impl SyncType for DataRecord {
    const TYPE_TAG: &'static str = "DataRecord";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .primitive("numval")
                .primitive_as("stringval", "_stringval")
                .nested::<Complex>("complexVal")
                .build()
        })
    }
}

/// A list of nested [`Complex`] values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    /// The entries.
    pub items: Vec<Complex>,
}

impl Syncable for Roster {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "items" => Ok(FieldRef::list(&self.items)),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "items" => self.items = value.into_list(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }
}

impl SyncType for Roster {
    const TYPE_TAG: &'static str = "Roster";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .nested::<Complex>("items")
                .build()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_knows_every_fixture() {
        let provider = fixture_provider();
        assert_eq!(
            provider.type_names(),
            vec!["Complex", "DataRecord", "Holder", "Node", "Roster"]
        );
        assert!(Holder::type_schema().provider().unwrap().ptr_eq(provider));
    }

    #[test]
    fn chain_builder_links_in_order() {
        assert_eq!(Node::chain(&[1, 2, 3]).values(), vec![1, 2, 3]);
        assert_eq!(Node::chain(&[]).values(), vec![0]);
    }

    #[test]
    fn record_summary_tracks_setter() {
        let mut record = DataRecord::default();
        assert_eq!(record.summary(), "hello 1");
        record.set_numval(5);
        assert_eq!(record.summary(), "hello 5");
        assert_eq!(record.summary_builds(), 2);
    }
}
