//! The [`Function`] container: a numeric buffer that is also a
//! value-role argument.

use crate::array::Array;
use crate::buffer::{NdBuffer, NumericBuffer};
use crate::domain::Domain;
use crate::error::FieldError;
use weft_core::{Rank, ScalarKind, SpaceRef};
use weft_form::{Argument, BasisFunction, Expr};

/// Check that a buffer has either the physical or the coefficient
/// layout of `space`.
pub(crate) fn check_layout(space: &SpaceRef, buffer: &NdBuffer) -> Result<(), FieldError> {
    let matches_side = |forward: bool| {
        space.field_shape(forward).as_slice() == buffer.shape()
            && space.field_kind(forward) == buffer.kind()
    };
    if matches_side(true) || matches_side(false) {
        Ok(())
    } else {
        Err(FieldError::ShapeMismatch {
            got: buffer.shape().iter().copied().collect(),
            expected_physical: space.field_shape(false),
            expected_coefficient: space.field_shape(true),
        })
    }
}

/// Derive the domain of a validated buffer over `space`.
pub(crate) fn derive_domain(space: &SpaceRef, buffer: &NdBuffer) -> Domain {
    if space.is_forward_output(buffer.shape(), buffer.kind()) {
        Domain::Coefficient
    } else {
        Domain::Physical
    }
}

/// A concrete field: a numeric buffer plus a value-role basis handle.
///
/// The buffer half makes it data the assembly engine can bind; the
/// basis half makes it an operand the form algebra accepts, so a known
/// field (a previous iterate, a forcing term) can appear inside an
/// expression. The two capabilities are composed — the container owns
/// an [`NdBuffer`] and a [`BasisFunction`] and delegates to each.
///
/// Shape and element kind are never stored here: they are derived from
/// the owning space's transform descriptors at construction and
/// validated on every buffer-accepting path.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub(crate) basis: BasisFunction,
    pub(crate) buffer: NdBuffer,
}

impl Function {
    /// A zero-filled function over `space` in the given domain.
    ///
    /// The buffer takes the layout of the forward transform's input
    /// (physical) or output (coefficient), with a leading component
    /// axis when the space is vector-valued.
    pub fn new(space: SpaceRef, domain: Domain) -> Self {
        let forward = domain == Domain::Coefficient;
        let buffer = NdBuffer::zeros(space.field_shape(forward), space.field_kind(forward));
        Self {
            basis: BasisFunction::value(space),
            buffer,
        }
    }

    /// Wrap an existing buffer as a function over `space`, preserving
    /// the buffer (no copy).
    ///
    /// Fails with [`FieldError::ShapeMismatch`] unless the buffer has
    /// one of the two layouts the space derives.
    pub fn from_buffer(space: SpaceRef, buffer: NdBuffer) -> Result<Self, FieldError> {
        check_layout(&space, &buffer)?;
        Ok(Self {
            basis: BasisFunction::value(space),
            buffer,
        })
    }

    pub(crate) fn from_validated_parts(basis: BasisFunction, buffer: NdBuffer) -> Self {
        Self { basis, buffer }
    }

    /// The value-role basis handle, for embedding in expressions.
    pub fn basis(&self) -> &BasisFunction {
        &self.basis
    }

    /// The function space this field lives on.
    pub fn function_space(&self) -> &SpaceRef {
        self.basis.function_space()
    }

    /// Always [`Argument::Value`].
    pub fn argument(&self) -> Argument {
        self.basis.argument()
    }

    /// Rank of the underlying space.
    pub fn rank(&self) -> Rank {
        self.basis.rank()
    }

    /// Number of vector components of the underlying space.
    pub fn num_components(&self) -> usize {
        self.basis.num_components()
    }

    /// Index into the parent vector space, for component slices.
    pub fn index(&self) -> usize {
        self.basis.index()
    }

    /// Which domain the buffer currently represents, re-derived from
    /// its layout.
    pub fn domain(&self) -> Domain {
        derive_domain(self.basis.function_space(), &self.buffer)
    }

    /// The owned buffer.
    pub fn buffer(&self) -> &NdBuffer {
        &self.buffer
    }

    /// Mutable access to the owned buffer's elements.
    pub fn buffer_mut(&mut self) -> &mut NdBuffer {
        &mut self.buffer
    }

    /// Extract component `i` of a vector-valued function.
    ///
    /// Slices the buffer along the component axis *and* rebinds the
    /// result to the `i`-th scalar sub-space, re-deriving whether the
    /// slice is physical or coefficient data — a raw buffer slice
    /// carries no space typing of its own.
    pub fn component(&self, i: usize) -> Result<Function, FieldError> {
        if self.rank() != Rank::Vector {
            return Err(FieldError::NotVectorValued);
        }
        let basis = self
            .basis
            .component(i)
            .map_err(|_| FieldError::ComponentIndex {
                index: i,
                num_components: self.num_components(),
            })?;
        let slice = self.buffer.slice_axis0(i)?;
        check_layout(basis.function_space(), &slice)?;
        Ok(Self::from_validated_parts(basis, slice))
    }

    /// Convert into an [`Array`], reusing the buffer without copying.
    ///
    /// The argument role is dropped; the result can no longer appear in
    /// expressions until converted back.
    pub fn as_array(self) -> Array {
        Array::from_validated_parts(self.basis.function_space().clone(), self.buffer)
    }
}

impl NumericBuffer for Function {
    fn shape(&self) -> &[usize] {
        self.buffer.shape()
    }

    fn kind(&self) -> ScalarKind {
        self.buffer.kind()
    }

    fn len(&self) -> usize {
        self.buffer.len()
    }
}

impl From<&Function> for Expr {
    /// Lift the function's value-role basis into a one-term identity
    /// expression, so the field can appear in a form as known data.
    fn from(function: &Function) -> Self {
        Expr::from_basis(function.basis.clone())
    }
}
