//! The dense numeric buffer behind [`Function`](crate::Function) and
//! [`Array`](crate::Array).

use crate::error::FieldError;
use num_complex::Complex64;
use weft_core::{ScalarKind, Shape};

/// The buffer capability: shape, element kind, element count.
///
/// Value containers implement this by delegating to their owned
/// [`NdBuffer`] — composition, not inheritance, is how a container
/// doubles as a numeric array.
pub trait NumericBuffer {
    /// Buffer extents.
    fn shape(&self) -> &[usize];

    /// Element kind.
    fn kind(&self) -> ScalarKind;

    /// Total number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element storage of an [`NdBuffer`], discriminated by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum BufferData {
    /// Real elements.
    Real(Vec<f64>),
    /// Complex elements.
    Complex(Vec<Complex64>),
}

impl BufferData {
    /// Element kind of the storage.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Real(_) => ScalarKind::Real,
            Self::Complex(_) => ScalarKind::Complex,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Real(v) => v.len(),
            Self::Complex(v) => v.len(),
        }
    }

    /// Returns `true` if the storage holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slice(&self, range: std::ops::Range<usize>) -> Self {
        match self {
            Self::Real(v) => Self::Real(v[range].to_vec()),
            Self::Complex(v) => Self::Complex(v[range].to_vec()),
        }
    }
}

/// A dense row-major numeric buffer with a shape.
///
/// This layer never evaluates anything numerically; the buffer exists
/// so that known data can be carried alongside a form and handed to the
/// assembly engine with its layout intact.
#[derive(Clone, Debug, PartialEq)]
pub struct NdBuffer {
    shape: Shape,
    data: BufferData,
}

impl NdBuffer {
    /// Zero-filled buffer of the given shape and element kind.
    pub fn zeros(shape: impl IntoIterator<Item = usize>, kind: ScalarKind) -> Self {
        let shape: Shape = shape.into_iter().collect();
        let len = shape.iter().product();
        let data = match kind {
            ScalarKind::Real => BufferData::Real(vec![0.0; len]),
            ScalarKind::Complex => BufferData::Complex(vec![Complex64::new(0.0, 0.0); len]),
        };
        Self { shape, data }
    }

    /// Buffer from a declared shape and real elements.
    pub fn from_real(
        shape: impl IntoIterator<Item = usize>,
        data: Vec<f64>,
    ) -> Result<Self, FieldError> {
        Self::from_data(shape.into_iter().collect(), BufferData::Real(data))
    }

    /// Buffer from a declared shape and complex elements.
    pub fn from_complex(
        shape: impl IntoIterator<Item = usize>,
        data: Vec<Complex64>,
    ) -> Result<Self, FieldError> {
        Self::from_data(shape.into_iter().collect(), BufferData::Complex(data))
    }

    fn from_data(shape: Shape, data: BufferData) -> Result<Self, FieldError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(FieldError::SizeMismatch {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Element storage.
    pub fn data(&self) -> &BufferData {
        &self.data
    }

    /// Mutable element storage.
    pub fn data_mut(&mut self) -> &mut BufferData {
        &mut self.data
    }

    /// Real elements, or `None` for a complex buffer.
    pub fn as_real(&self) -> Option<&[f64]> {
        match &self.data {
            BufferData::Real(v) => Some(v),
            BufferData::Complex(_) => None,
        }
    }

    /// Complex elements, or `None` for a real buffer.
    pub fn as_complex(&self) -> Option<&[Complex64]> {
        match &self.data {
            BufferData::Real(_) => None,
            BufferData::Complex(v) => Some(v),
        }
    }

    /// Copy of the `i`-th hyperplane along axis 0, with the leading
    /// axis dropped.
    ///
    /// Used by component extraction on vector-valued containers: the
    /// slice has exactly the layout of one scalar sub-field.
    pub fn slice_axis0(&self, i: usize) -> Result<Self, FieldError> {
        let extent = *self.shape.first().unwrap_or(&0);
        if i >= extent {
            return Err(FieldError::ComponentIndex {
                index: i,
                num_components: extent,
            });
        }
        let block: usize = self.shape[1..].iter().product();
        let shape: Shape = self.shape[1..].iter().copied().collect();
        Ok(Self {
            shape,
            data: self.data.slice(i * block..(i + 1) * block),
        })
    }
}

impl NumericBuffer for NdBuffer {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn kind(&self) -> ScalarKind {
        self.data.kind()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_real_and_complex() {
        let r = NdBuffer::zeros([2, 3], ScalarKind::Real);
        assert_eq!(r.shape(), &[2, 3]);
        assert_eq!(r.kind(), ScalarKind::Real);
        assert_eq!(r.len(), 6);
        assert_eq!(r.as_real().unwrap(), &[0.0; 6]);

        let c = NdBuffer::zeros([4], ScalarKind::Complex);
        assert_eq!(c.kind(), ScalarKind::Complex);
        assert_eq!(c.as_complex().unwrap().len(), 4);
        assert!(c.as_real().is_none());
    }

    #[test]
    fn from_real_checks_size() {
        let err = NdBuffer::from_real([2, 2], vec![1.0; 3]).unwrap_err();
        assert!(matches!(err, FieldError::SizeMismatch { len: 3, .. }));
    }

    #[test]
    fn slice_axis0_drops_leading_axis() {
        let b = NdBuffer::from_real([2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let s = b.slice_axis0(1).unwrap();
        assert_eq!(s.shape(), &[3]);
        assert_eq!(s.as_real().unwrap(), &[4.0, 5.0, 6.0]);

        let err = b.slice_axis0(2).unwrap_err();
        assert!(matches!(err, FieldError::ComponentIndex { index: 2, .. }));
    }
}
