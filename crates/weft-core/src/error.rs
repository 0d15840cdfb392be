//! Error types for space queries and tensor construction.

use crate::Shape;
use std::fmt;

/// Errors arising from function-space component queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Component index is outside `0..num_components`.
    ComponentOutOfRange {
        /// The requested component.
        index: usize,
        /// Number of components the space has.
        num_components: usize,
    },
    /// Component extraction was attempted on a scalar space.
    ScalarHasNoComponents,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentOutOfRange {
                index,
                num_components,
            } => {
                write!(
                    f,
                    "component {index} out of range for space with {num_components} components"
                )
            }
            Self::ScalarHasNoComponents => {
                write!(f, "scalar space has no components to extract")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

/// Errors arising from tensor construction or combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Declared shape does not match the number of elements provided.
    SizeMismatch {
        /// The declared shape.
        shape: Shape,
        /// Number of elements actually provided.
        len: usize,
    },
    /// Two tensors disagree on an extent that must match.
    ExtentMismatch {
        /// Axis on which the extents differ.
        axis: usize,
        /// Extent of the left tensor.
        left: usize,
        /// Extent of the right tensor.
        right: usize,
    },
    /// A tensor has the wrong number of axes for an operation: the
    /// operands disagree, or an operand falls short of the minimum an
    /// operation needs.
    RankMismatch {
        /// Number of axes of the left (or offending) tensor.
        left: usize,
        /// Number of axes of the right tensor, or the required minimum.
        right: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { shape, len } => {
                write!(f, "shape {shape:?} does not hold {len} elements")
            }
            Self::ExtentMismatch { axis, left, right } => {
                write!(f, "extent mismatch on axis {axis}: {left} vs {right}")
            }
            Self::RankMismatch { left, right } => {
                write!(f, "rank mismatch: {left} axes vs {right} axes")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
