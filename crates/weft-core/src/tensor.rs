//! A small dense row-major tensor for term bookkeeping.
//!
//! The form algebra manipulates three parallel tensors per expression
//! (derivative orders, scales, target indices) whose extents are the
//! component count, term count, and spatial dimension count. These are
//! tiny — a handful of elements — so [`Tensor`] favors simplicity over
//! throughput: contiguous `Vec` storage, copying slices, no views.

use crate::error::ShapeError;
use crate::Shape;

/// Dense row-major tensor with up to four axes inline.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Clone> Tensor<T> {
    /// Tensor with every element set to `value`.
    pub fn filled(shape: impl IntoIterator<Item = usize>, value: T) -> Self {
        let shape: Shape = shape.into_iter().collect();
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![value; len],
        }
    }

    /// Tensor from a declared shape and its row-major elements.
    ///
    /// Returns `Err(ShapeError::SizeMismatch)` if the shape's element
    /// count disagrees with `data.len()`.
    pub fn from_vec(shape: impl IntoIterator<Item = usize>, data: Vec<T>) -> Result<Self, ShapeError> {
        let shape: Shape = shape.into_iter().collect();
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(ShapeError::SizeMismatch {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Copy of the `i`-th hyperplane along axis 0, with a leading axis
    /// of extent 1.
    ///
    /// # Panics
    ///
    /// Panics if `i >= shape[0]`. Callers validate component indices
    /// before slicing.
    pub fn slice_axis0(&self, i: usize) -> Self {
        let block = self.block_len();
        let mut shape = self.shape.clone();
        shape[0] = 1;
        Self {
            shape,
            data: self.data[i * block..(i + 1) * block].to_vec(),
        }
    }

    /// Concatenate two tensors along axis 1.
    ///
    /// All other axes must agree, and both operands need at least two
    /// axes so the concatenation axis exists. This is the term-axis
    /// accumulation every add/subtract path goes through.
    pub fn concat_axis1(a: &Self, b: &Self) -> Result<Self, ShapeError> {
        if a.shape.len() != b.shape.len() {
            return Err(ShapeError::RankMismatch {
                left: a.shape.len(),
                right: b.shape.len(),
            });
        }
        if a.shape.len() < 2 {
            return Err(ShapeError::RankMismatch {
                left: a.shape.len(),
                right: 2,
            });
        }
        for axis in 0..a.shape.len() {
            if axis != 1 && a.shape[axis] != b.shape[axis] {
                return Err(ShapeError::ExtentMismatch {
                    axis,
                    left: a.shape[axis],
                    right: b.shape[axis],
                });
            }
        }
        let mut shape = a.shape.clone();
        shape[1] = a.shape[1] + b.shape[1];
        let a_block = a.block_len();
        let b_block = b.block_len();
        let mut data = Vec::with_capacity(a.data.len() + b.data.len());
        for i in 0..a.shape[0] {
            data.extend_from_slice(&a.data[i * a_block..(i + 1) * a_block]);
            data.extend_from_slice(&b.data[i * b_block..(i + 1) * b_block]);
        }
        Ok(Self { shape, data })
    }

    /// New tensor with `f` applied to every element.
    pub fn map(&self, f: impl FnMut(&T) -> T) -> Self {
        Self {
            shape: self.shape.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> Tensor<T> {
    /// Tensor extents.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at a multi-index, or `None` if out of range.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).map(|o| &self.data[o])
    }

    /// Mutable element at a multi-index, or `None` if out of range.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        self.offset(index).map(move |o| &mut self.data[o])
    }

    /// Row-major elements.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major elements.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Contiguous elements of the `i`-th hyperplane along axis 0.
    pub fn block_axis0(&self, i: usize) -> &[T] {
        let block = self.block_len();
        &self.data[i * block..(i + 1) * block]
    }

    /// Mutable contiguous elements of the `i`-th hyperplane along axis 0.
    pub fn block_axis0_mut(&mut self, i: usize) -> &mut [T] {
        let block = self.block_len();
        &mut self.data[i * block..(i + 1) * block]
    }

    /// Elements per axis-0 hyperplane.
    fn block_len(&self) -> usize {
        self.shape[1..].iter().product()
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (axis, (&i, &extent)) in index.iter().zip(self.shape.iter()).enumerate() {
            if i >= extent {
                return None;
            }
            let stride: usize = self.shape[axis + 1..].iter().product();
            offset += i * stride;
        }
        Some(offset)
    }
}

impl<T> std::ops::Index<&[usize]> for Tensor<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &T {
        self.get(index).expect("tensor index out of range")
    }
}

impl<T> std::ops::IndexMut<&[usize]> for Tensor<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut T {
        self.get_mut(index).expect("tensor index out of range")
    }
}
