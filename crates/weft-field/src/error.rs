//! Error types for field-container construction and slicing.

use std::fmt;
use weft_core::Shape;

/// Errors raised while constructing or slicing field containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A buffer's layout matches neither the physical nor the
    /// coefficient layout of the target space.
    ShapeMismatch {
        /// Shape of the offending buffer.
        got: Shape,
        /// The space's physical-side field shape.
        expected_physical: Shape,
        /// The space's coefficient-side field shape.
        expected_coefficient: Shape,
    },
    /// Declared shape does not match the number of elements provided.
    SizeMismatch {
        /// The declared shape.
        shape: Shape,
        /// Number of elements actually provided.
        len: usize,
    },
    /// Component extraction with an out-of-range index.
    ComponentIndex {
        /// The requested component.
        index: usize,
        /// Number of components the container has.
        num_components: usize,
    },
    /// Component extraction on a container over a scalar space.
    NotVectorValued,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                got,
                expected_physical,
                expected_coefficient,
            } => {
                write!(
                    f,
                    "buffer shape {got:?} matches neither physical layout \
                     {expected_physical:?} nor coefficient layout {expected_coefficient:?}"
                )
            }
            Self::SizeMismatch { shape, len } => {
                write!(f, "shape {shape:?} does not hold {len} elements")
            }
            Self::ComponentIndex {
                index,
                num_components,
            } => {
                write!(
                    f,
                    "component {index} out of range ({num_components} components)"
                )
            }
            Self::NotVectorValued => {
                write!(f, "component extraction on a scalar-space container")
            }
        }
    }
}

impl std::error::Error for FieldError {}
