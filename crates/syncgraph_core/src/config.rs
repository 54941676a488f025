//! Per-type sync configuration.

/// What decode does with an entry whose property is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Fail with [`SyncError::UnknownMember`](crate::SyncError::UnknownMember).
    #[default]
    Fail,
    /// Skip the entry.
    Ignore,
}

/// Configuration attached to a type schema.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Handling of entries that name no registered property.
    pub unknown_fields: UnknownFieldPolicy,

    /// Reconstruct every value before assigning any.
    ///
    /// When false, fields are assigned as soon as each entry is decoded, so a
    /// failure partway through leaves earlier fields applied.
    pub atomic_apply: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Fail,
            atomic_apply: true,
        }
    }
}

impl SyncConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unknown field policy.
    #[must_use]
    pub const fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Sets whether decode assigns only after the whole payload validated.
    #[must_use]
    pub const fn atomic_apply(mut self, value: bool) -> Self {
        self.atomic_apply = value;
        self
    }
}
