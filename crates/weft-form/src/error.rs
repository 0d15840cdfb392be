//! Error types for form construction and combination.

use std::fmt;
use weft_core::{ShapeError, SpaceError};

/// Errors raised while building or combining form expressions.
///
/// All variants are local, synchronous failures at the point of the
/// offending operation; nothing is retried or recovered internally.
#[derive(Clone, Debug, PartialEq)]
pub enum FormError {
    /// The term/scale/index tensors of an expression are inconsistent
    /// with each other or with the underlying space.
    ShapeConsistency {
        /// What disagreed.
        reason: String,
    },
    /// Two expressions cannot be combined: different spaces, different
    /// argument roles, or different component counts.
    IncompatibleOperands {
        /// Which compatibility gate failed.
        reason: String,
    },
    /// A scaling operand has the wrong type or arity for the
    /// expression's rank.
    UnsupportedOperation {
        /// What was attempted.
        reason: String,
    },
    /// Component extraction on a scalar entity, or index out of range.
    ComponentIndex {
        /// The requested component.
        index: usize,
        /// Number of components the entity has.
        num_components: usize,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeConsistency { reason } => {
                write!(f, "inconsistent form tensors: {reason}")
            }
            Self::IncompatibleOperands { reason } => {
                write!(f, "incompatible operands: {reason}")
            }
            Self::UnsupportedOperation { reason } => {
                write!(f, "unsupported operation: {reason}")
            }
            Self::ComponentIndex {
                index,
                num_components,
            } => {
                if *num_components <= 1 {
                    write!(f, "component {index} requested from a scalar entity")
                } else {
                    write!(
                        f,
                        "component {index} out of range ({num_components} components)"
                    )
                }
            }
        }
    }
}

impl std::error::Error for FormError {}

impl From<ShapeError> for FormError {
    fn from(err: ShapeError) -> Self {
        Self::ShapeConsistency {
            reason: err.to_string(),
        }
    }
}

impl From<SpaceError> for FormError {
    fn from(err: SpaceError) -> Self {
        match err {
            SpaceError::ComponentOutOfRange {
                index,
                num_components,
            } => Self::ComponentIndex {
                index,
                num_components,
            },
            SpaceError::ScalarHasNoComponents => Self::ComponentIndex {
                index: 0,
                num_components: 1,
            },
        }
    }
}
