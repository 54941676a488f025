//! Error types for syncgraph core.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while registering, encoding or decoding.
///
/// All of these describe schema or registration mistakes. None is transient,
/// so retrying with the same inputs fails the same way.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The operand's type has no declared sync schema.
    #[error("type {type_name} is not syncable")]
    NotSyncable {
        /// Name or tag of the offending type.
        type_name: String,
    },

    /// Encode or decode reached a descriptor still awaiting late binding.
    #[error("member {member} of {type_name} is late-bound and has not been bound yet")]
    UnresolvedLateBind {
        /// Tag of the type owning the descriptor.
        type_name: String,
        /// Published name of the member.
        member: String,
    },

    /// The registry has no factory for the requested name.
    #[error("no type registered under the name {name}")]
    UnknownType {
        /// The requested type name.
        name: String,
    },

    /// A type reference has no usable name.
    #[error("member {member} of {type_name} references a type without a stable tag")]
    InvalidTypeRef {
        /// Tag of the type owning the descriptor.
        type_name: String,
        /// Published name of the member.
        member: String,
    },

    /// A nested object must be fabricated but the target type has no provider.
    #[error("type {type_name} has no sync provider to create nested objects")]
    MissingProvider {
        /// Tag of the target type.
        type_name: String,
    },

    /// An element of an array member could not be encoded.
    #[error("element {index} of member {member} is not syncable")]
    ElementEncode {
        /// Property that holds the array.
        member: String,
        /// Position of the offending element.
        index: usize,
    },

    /// A member name is absent from the type's metadata table.
    #[error("member {member} not found on {type_name}")]
    UnknownMember {
        /// Tag of the type that was searched.
        type_name: String,
        /// The name that was not found.
        member: String,
    },

    /// The metadata says a member can be late-bound but its kind disagrees.
    #[error("member {member} of {type_name} was not declared for late binding")]
    InvalidAnnotation {
        /// Tag of the type owning the descriptor.
        type_name: String,
        /// Published name of the member.
        member: String,
    },

    /// A field setter rejected the reconstructed value.
    #[error("field {member} cannot accept the value: {message}")]
    FieldMismatch {
        /// Property being written.
        member: String,
        /// Description of the mismatch.
        message: String,
    },

    /// The authority index passed to a broadcast is out of range.
    #[error("authority index {index} out of range for {len} items")]
    AuthorityOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of items available.
        len: usize,
    },

    /// Transit codec error.
    #[error("codec error: {0}")]
    Codec(#[from] syncgraph_codec::CodecError),
}

impl SyncError {
    /// Creates a not-syncable error.
    pub fn not_syncable(type_name: impl Into<String>) -> Self {
        Self::NotSyncable {
            type_name: type_name.into(),
        }
    }

    /// Creates an unresolved late-bind error.
    pub fn unresolved_late_bind(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnresolvedLateBind {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Creates an invalid type reference error.
    pub fn invalid_type_ref(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::InvalidTypeRef {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Creates a missing provider error.
    pub fn missing_provider(type_name: impl Into<String>) -> Self {
        Self::MissingProvider {
            type_name: type_name.into(),
        }
    }

    /// Creates an element encode error.
    pub fn element_encode(member: impl Into<String>, index: usize) -> Self {
        Self::ElementEncode {
            member: member.into(),
            index,
        }
    }

    /// Creates an unknown member error.
    pub fn unknown_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::UnknownMember {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Creates an invalid annotation error.
    pub fn invalid_annotation(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::InvalidAnnotation {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Creates a field mismatch error.
    pub fn field_mismatch(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldMismatch {
            member: member.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncgraph_codec::CodecError;

    #[test]
    fn messages_name_the_culprit() {
        let err = SyncError::unresolved_late_bind("Node", "next");
        assert_eq!(
            err.to_string(),
            "member next of Node is late-bound and has not been bound yet"
        );

        let err = SyncError::element_encode("items", 3);
        assert_eq!(err.to_string(), "element 3 of member items is not syncable");
    }

    #[test]
    fn codec_errors_convert() {
        let err: SyncError = CodecError::invalid_structure("bad").into();
        assert!(matches!(err, SyncError::Codec(_)));
    }
}
