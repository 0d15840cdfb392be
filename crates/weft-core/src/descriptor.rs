//! Transform descriptors and the derived [`Rank`] classification.

use crate::Shape;
use std::fmt;

/// Element type of a numeric buffer.
///
/// Physical-space samples of a real field are `Real`; expansion
/// coefficients of a real-to-complex transform (e.g. a Fourier direction)
/// are `Complex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// 64-bit real elements.
    Real,
    /// 128-bit complex elements (two `f64` parts).
    Complex,
}

impl ScalarKind {
    /// Storage size of one element in bytes.
    pub fn size_of(self) -> usize {
        match self {
            Self::Real => 8,
            Self::Complex => 16,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// One endpoint of a space's forward transform: an array shape plus its
/// element type.
///
/// A function space declares two of these: the *input* descriptor (the
/// physical-space quadrature grid) and the *output* descriptor (the
/// expansion-coefficient array). Value containers derive their buffer
/// shape and dtype from these descriptors instead of storing them
/// redundantly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformShape {
    /// Array extents, one per spatial dimension.
    pub shape: Shape,
    /// Element type of the array.
    pub kind: ScalarKind,
}

impl TransformShape {
    /// Construct a descriptor from extents and element kind.
    pub fn new(shape: impl IntoIterator<Item = usize>, kind: ScalarKind) -> Self {
        Self {
            shape: shape.into_iter().collect(),
            kind,
        }
    }

    /// Total number of elements described.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Returns `true` if the described array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classification of a function space or expression by component count.
///
/// Always derived from the component count, never stored independently:
/// a single-component entity is `Scalar`, anything with more components
/// is `Vector`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    /// One component.
    Scalar,
    /// More than one component.
    Vector,
}

impl Rank {
    /// Derive the rank from a component count.
    pub fn of(num_components: usize) -> Self {
        if num_components > 1 {
            Self::Vector
        } else {
            Self::Scalar
        }
    }

    /// Numeric rank for interop with assembly engines: 1 for scalar,
    /// 2 for vector.
    pub fn as_index(self) -> u32 {
        match self {
            Self::Scalar => 1,
            Self::Vector => 2,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Vector => write!(f, "vector"),
        }
    }
}
