//! Lightweight basis-function handles bound to a function space.

use crate::argument::Argument;
use crate::error::FormError;
use std::fmt;
use weft_core::{Rank, SpaceRef};

/// A basis-function handle: a function space, an argument role, and a
/// vector-component index.
///
/// Represents the identity term (zero derivatives, unit scale)
/// implicitly; it owns no term tensors. Multi-term state lives only in
/// [`Expr`](crate::Expr) — arithmetic on a `BasisFunction` lifts it into
/// a one-term expression first. Handles are cheap to clone and
/// immutable; in-place combination is consequently not offered on this
/// type at all.
#[derive(Clone)]
pub struct BasisFunction {
    space: SpaceRef,
    argument: Argument,
    index: usize,
}

impl BasisFunction {
    /// Bind a basis function with an explicit role.
    pub fn new(space: SpaceRef, argument: Argument) -> Self {
        Self {
            space,
            argument,
            index: 0,
        }
    }

    /// A test function (argument 0) over `space`.
    pub fn test(space: SpaceRef) -> Self {
        Self::new(space, Argument::Test)
    }

    /// A trial function (argument 1) over `space`.
    pub fn trial(space: SpaceRef) -> Self {
        Self::new(space, Argument::Trial)
    }

    /// A value argument (argument 2, known data) over `space`.
    pub fn value(space: SpaceRef) -> Self {
        Self::new(space, Argument::Value)
    }

    /// Rank of the underlying space.
    pub fn rank(&self) -> Rank {
        self.space.rank()
    }

    /// The function space this handle is bound to.
    pub fn function_space(&self) -> &SpaceRef {
        &self.space
    }

    /// Role of this operand in a form.
    pub fn argument(&self) -> Argument {
        self.argument
    }

    /// Number of vector components of the underlying space.
    pub fn num_components(&self) -> usize {
        self.space.num_components()
    }

    /// Number of spatial dimensions of the underlying space.
    pub fn ndim(&self) -> usize {
        self.space.ndim()
    }

    /// Index into the parent vector space, for handles produced by
    /// component extraction. 0 for handles bound directly to a space.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Extract component `i`: a same-role handle bound to the `i`-th
    /// scalar sub-space with `index = i`.
    ///
    /// Fails with [`FormError::ComponentIndex`] on a scalar basis or for
    /// `i` out of range.
    pub fn component(&self, i: usize) -> Result<Self, FormError> {
        if self.rank() != Rank::Vector {
            return Err(FormError::ComponentIndex {
                index: i,
                num_components: 1,
            });
        }
        let sub = self.space.subspace(i)?;
        Ok(Self {
            space: sub,
            argument: self.argument,
            index: i,
        })
    }
}

impl fmt::Debug for BasisFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasisFunction")
            .field("space", &self.space.instance_id())
            .field("argument", &self.argument)
            .field("index", &self.index)
            .finish()
    }
}

impl PartialEq for BasisFunction {
    /// Handles are equal when they are bound to the same space instance
    /// with the same role and component index.
    fn eq(&self, other: &Self) -> bool {
        self.space.same_space(other.space.as_ref())
            && self.argument == other.argument
            && self.index == other.index
    }
}
