//! Small syncable types used by the unit tests.

use crate::error::{SyncError, SyncResult};
use crate::field::{FieldRef, FieldValue};
use crate::late_bind::late_bind;
use crate::provider::SyncProvider;
use crate::schema::TypeSchema;
use crate::syncable::{SyncFlag, SyncType, Syncable};
use std::sync::{LazyLock, OnceLock};

/// Provider with every registrable test type. Call before decoding nested data.
pub fn provider() -> &'static SyncProvider {
    static PROVIDER: LazyLock<SyncProvider> = LazyLock::new(|| {
        let provider = SyncProvider::new();
        provider.register::<Point>().unwrap();
        provider.register::<Segment>().unwrap();
        provider.register::<Chain>().unwrap();
        provider
    });
    &PROVIDER
}

#[derive(Debug, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub scratch: String,
    flag: SyncFlag,
    seen: Vec<bool>,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn observed_in_progress(&self) -> Vec<bool> {
        self.seen.clone()
    }
}

impl Syncable for Point {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "x" => FieldRef::primitive(&self.x),
            "y" => FieldRef::primitive(&self.y),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        let in_progress = self.is_sync_in_progress();
        self.seen.push(in_progress);
        match prop {
            "x" => self.x = value.into_primitive(prop)?,
            "y" => self.y = value.into_primitive(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }

    fn check_field(&self, prop: &str, value: &FieldValue) -> SyncResult<()> {
        match prop {
            "x" | "y" => value.check_primitive::<i64>(prop),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn sync_flag(&self) -> Option<&SyncFlag> {
        Some(&self.flag)
    }
}

impl SyncType for Point {
    const TYPE_TAG: &'static str = "Point";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .primitive("x")
                .primitive("y")
                .build()
        })
    }
}

#[derive(Debug, Default)]
pub struct Segment {
    pub label: String,
    pub start: Option<Point>,
    pub points: Vec<Point>,
}

impl Syncable for Segment {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "_label" => FieldRef::primitive(&self.label),
            "start" => Ok(FieldRef::optional(self.start.as_ref())),
            "points" => Ok(FieldRef::list(&self.points)),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "_label" => self.label = value.into_primitive(prop)?,
            "start" => self.start = value.into_object(prop)?,
            "points" => self.points = value.into_list(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }
}

impl SyncType for Segment {
    const TYPE_TAG: &'static str = "Segment";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .primitive_as("label", "_label")
                .nested::<Point>("start")
                .nested::<Point>("points")
                .build()
        })
    }
}

#[derive(Debug)]
pub struct Chain {
    pub id: i64,
    pub next: Option<Box<Chain>>,
}

impl Default for Chain {
    fn default() -> Self {
        let chain = Self { id: 0, next: None };
        late_bind::<Chain, _>(&chain, "next").unwrap();
        chain
    }
}

impl Syncable for Chain {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        Some(Self::type_schema())
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "id" => FieldRef::primitive(&self.id),
            "next" => Ok(FieldRef::optional(self.next.as_deref())),
            _ => Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "id" => self.id = value.into_primitive(prop)?,
            "next" => self.next = value.into_boxed(prop)?,
            _ => return Err(SyncError::unknown_member(Self::TYPE_TAG, prop)),
        }
        Ok(())
    }
}

impl SyncType for Chain {
    const TYPE_TAG: &'static str = "Chain";

    fn type_schema() -> &'static TypeSchema {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            TypeSchema::builder(Self::TYPE_TAG)
                .primitive("id")
                .late_bind("next")
                .build()
        })
    }
}

/// Never registered anywhere, so it has no provider.
#[derive(Debug, Default)]
pub struct Orphan {
    pub inner: Option<Point>,
}

impl Syncable for Orphan {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
        Some(SCHEMA.get_or_init(|| {
            TypeSchema::builder("Orphan")
                .nested::<Point>("inner")
                .build()
        }))
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "inner" => Ok(FieldRef::optional(self.inner.as_ref())),
            _ => Err(SyncError::unknown_member("Orphan", prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "inner" => self.inner = value.into_object(prop)?,
            _ => return Err(SyncError::unknown_member("Orphan", prop)),
        }
        Ok(())
    }
}

/// Implements the accessors but declares no schema.
#[derive(Debug, Default)]
pub struct Undeclared {
    pub value: i64,
}

impl Syncable for Undeclared {
    fn sync_schema(&self) -> Option<&'static TypeSchema> {
        None
    }

    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
        match prop {
            "value" => FieldRef::primitive(&self.value),
            _ => Err(SyncError::unknown_member("Undeclared", prop)),
        }
    }

    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
        match prop {
            "value" => self.value = value.into_primitive(prop)?,
            _ => return Err(SyncError::unknown_member("Undeclared", prop)),
        }
        Ok(())
    }
}
