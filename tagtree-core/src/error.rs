use core::fmt;

/// Errors that can occur when building a record out of a [`Partial`](crate::Partial).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectError {
    /// Tried to build a record without filling one of its fields.
    Uninitialized {
        /// The record being built.
        type_name: &'static str,
        /// The field that was not filled.
        field: &'static str,
    },

    /// Asked for a field the layout does not declare.
    NoSuchField {
        /// The record being built.
        type_name: &'static str,
        /// The requested key.
        field: &'static str,
    },

    /// A slot held a different kind of value than the target type expects.
    WrongShape {
        /// What the target type expected.
        expected: &'static str,
        /// What the slot contained.
        got: &'static str,
    },

    /// A field position past the end of the layout.
    FieldIndexOutOfRange {
        /// The record being built.
        type_name: &'static str,
        /// The requested position.
        index: usize,
    },

    /// Tried to take the base layer of a partial that has none.
    MissingBase {
        /// The record being built.
        type_name: &'static str,
    },

    /// The partial was filled against a different layout than the target type's.
    LayoutMismatch {
        /// The target type's layout.
        expected: &'static str,
        /// The layout the partial was filled against.
        actual: &'static str,
    },
}

impl fmt::Display for ReflectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectError::Uninitialized { type_name, field } => {
                write!(f, "{type_name} partially initialized: field `{field}` was not set")
            }
            ReflectError::NoSuchField { type_name, field } => {
                write!(f, "{type_name} has no field `{field}`")
            }
            ReflectError::WrongShape { expected, got } => {
                write!(f, "wrong shape: expected {expected}, but got {got}")
            }
            ReflectError::FieldIndexOutOfRange { type_name, index } => {
                write!(f, "{type_name} has no field at position {index}")
            }
            ReflectError::MissingBase { type_name } => {
                write!(f, "{type_name} has no base layer to take")
            }
            ReflectError::LayoutMismatch { expected, actual } => {
                write!(f, "layout mismatch: building {expected} from a partial of {actual}")
            }
        }
    }
}

impl core::error::Error for ReflectError {}
