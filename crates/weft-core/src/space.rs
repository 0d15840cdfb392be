//! The [`FunctionSpace`] contract and `dyn FunctionSpace` downcast support.
//!
//! Weft never constructs spectral bases or quadrature itself; it consumes
//! spaces through this trait. A provider declares how many spatial
//! dimensions and vector components it has and what its forward transform
//! looks like at both endpoints, and the form algebra derives everything
//! else.

use crate::descriptor::{Rank, ScalarKind, TransformShape};
use crate::error::SpaceError;
use crate::id::SpaceInstanceId;
use crate::Shape;
use std::any::Any;
use std::sync::Arc;

/// Shared handle to a function space.
pub type SpaceRef = Arc<dyn FunctionSpace>;

/// Contract a function-space provider must satisfy.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn FunctionSpace` behind a
/// [`SpaceRef`]. Use `downcast_ref` for opt-in specialization on
/// concrete provider types.
///
/// # Identity
///
/// Expressions may only be combined when they live on the *same* space.
/// Sameness is object identity, not structural equality: implementors
/// allocate a [`SpaceInstanceId`] at construction and a vector space
/// must return stable child handles from [`subspace`](Self::subspace)
/// so that repeated component extraction agrees.
pub trait FunctionSpace: Any + Send + Sync {
    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Number of vector components; 1 for a scalar space.
    fn num_components(&self) -> usize;

    /// Rank derived from the component count.
    fn rank(&self) -> Rank {
        Rank::of(self.num_components())
    }

    /// Descriptor of the forward transform's input (physical space).
    fn forward_input(&self) -> TransformShape;

    /// Descriptor of the forward transform's output (coefficient space).
    fn forward_output(&self) -> TransformShape;

    /// The `i`-th scalar component space.
    ///
    /// Fails with [`SpaceError::ScalarHasNoComponents`] on a scalar
    /// space and [`SpaceError::ComponentOutOfRange`] for `i` out of
    /// range. Repeated calls with the same `i` must return the same
    /// handle (same [`SpaceInstanceId`]).
    fn subspace(&self, i: usize) -> Result<SpaceRef, SpaceError>;

    /// Unique instance identifier for this space object.
    fn instance_id(&self) -> SpaceInstanceId;

    /// Returns `true` if `self` and `other` are the same space instance.
    fn same_space(&self, other: &dyn FunctionSpace) -> bool {
        self.instance_id() == other.instance_id()
    }

    /// Buffer shape for a field over this space in the given domain:
    /// the matching transform descriptor's shape, with a leading
    /// component axis prepended when the space is vector-valued.
    fn field_shape(&self, forward_output: bool) -> Shape {
        let descriptor = if forward_output {
            self.forward_output()
        } else {
            self.forward_input()
        };
        let mut shape = Shape::new();
        if self.num_components() > 1 {
            shape.push(self.num_components());
        }
        shape.extend_from_slice(&descriptor.shape);
        shape
    }

    /// Element kind for a field over this space in the given domain.
    fn field_kind(&self, forward_output: bool) -> ScalarKind {
        if forward_output {
            self.forward_output().kind
        } else {
            self.forward_input().kind
        }
    }

    /// The "matches forward output" rule: returns `true` if a buffer of
    /// the given shape and element kind matches this space's
    /// coefficient-side field layout.
    ///
    /// A raw buffer slice carries no space typing of its own; this rule
    /// is how value containers re-derive whether a buffer holds
    /// expansion coefficients or physical samples.
    fn is_forward_output(&self, shape: &[usize], kind: ScalarKind) -> bool {
        self.field_shape(true).as_slice() == shape && self.field_kind(true) == kind
    }
}

impl dyn FunctionSpace {
    /// Attempt to downcast a trait object to a concrete space type.
    pub fn downcast_ref<T: FunctionSpace>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
