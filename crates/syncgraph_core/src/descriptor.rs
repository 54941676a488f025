//! Property descriptors.

/// How a registered property is encoded and reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    /// Passed through encode and decode unchanged.
    Primitive,
    /// Target type not known yet; must be bound before use.
    LateBind,
    /// A nested syncable object of the type registered under this tag.
    TypeRef(&'static str),
}

impl SyncKind {
    /// Returns true if this kind still awaits late binding.
    pub fn is_late_bind(&self) -> bool {
        matches!(self, SyncKind::LateBind)
    }

    /// Returns the referenced type tag, if this is a type reference.
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            SyncKind::TypeRef(tag) => Some(*tag),
            _ => None,
        }
    }
}

/// Describes one registered property of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDescriptor {
    prop_name: String,
    kind: SyncKind,
    allow_late_binding: bool,
}

impl SyncDescriptor {
    /// Creates a descriptor. Late binding is allowed only for [`SyncKind::LateBind`].
    pub fn new(prop_name: impl Into<String>, kind: SyncKind) -> Self {
        Self {
            prop_name: prop_name.into(),
            allow_late_binding: kind.is_late_bind(),
            kind,
        }
    }

    /// Creates a descriptor from raw parts, as a registration front-end
    /// populating a table directly would.
    pub fn from_parts(
        prop_name: impl Into<String>,
        kind: SyncKind,
        allow_late_binding: bool,
    ) -> Self {
        Self {
            prop_name: prop_name.into(),
            kind,
            allow_late_binding,
        }
    }

    /// The property read on encode and written on decode.
    pub fn prop_name(&self) -> &str {
        &self.prop_name
    }

    /// The declared kind.
    pub fn kind(&self) -> SyncKind {
        self.kind
    }

    /// Whether this descriptor may still be late-bound.
    pub fn allow_late_binding(&self) -> bool {
        self.allow_late_binding
    }

    /// Resolves a late-bound descriptor to a concrete type. Permanent.
    pub(crate) fn bind(&mut self, tag: &'static str) {
        self.kind = SyncKind::TypeRef(tag);
        self.allow_late_binding = false;
    }
}
