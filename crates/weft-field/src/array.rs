//! The [`Array`] container: a numeric buffer bound to a space, with no
//! argument role.

use crate::buffer::{NdBuffer, NumericBuffer};
use crate::domain::Domain;
use crate::error::FieldError;
use crate::function::{check_layout, derive_domain, Function};
use weft_core::{Rank, ScalarKind, SpaceRef};
use weft_form::BasisFunction;

/// Raw field data bound to a function space.
///
/// Same shape and element-kind derivation as [`Function`], but an
/// `Array` carries no argument role and cannot appear inside the form
/// algebra. Convert with [`as_function`](Self::as_function) — the
/// buffer moves, it is never copied.
#[derive(Clone)]
pub struct Array {
    space: SpaceRef,
    buffer: NdBuffer,
}

impl core::fmt::Debug for Array {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Array")
            .field("space", &self.space.instance_id())
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl PartialEq for Array {
    /// Arrays are equal when they are bound to the same space instance
    /// and hold equal buffers.
    fn eq(&self, other: &Self) -> bool {
        self.space.same_space(other.space.as_ref()) && self.buffer == other.buffer
    }
}

impl Array {
    /// A zero-filled array over `space` in the given domain.
    pub fn new(space: SpaceRef, domain: Domain) -> Self {
        let forward = domain == Domain::Coefficient;
        let buffer = NdBuffer::zeros(space.field_shape(forward), space.field_kind(forward));
        Self { space, buffer }
    }

    /// Wrap an existing buffer as an array over `space`, preserving the
    /// buffer (no copy).
    ///
    /// Fails with [`FieldError::ShapeMismatch`] unless the buffer has
    /// one of the two layouts the space derives.
    pub fn from_buffer(space: SpaceRef, buffer: NdBuffer) -> Result<Self, FieldError> {
        check_layout(&space, &buffer)?;
        Ok(Self { space, buffer })
    }

    pub(crate) fn from_validated_parts(space: SpaceRef, buffer: NdBuffer) -> Self {
        Self { space, buffer }
    }

    /// The function space this array is bound to.
    pub fn function_space(&self) -> &SpaceRef {
        &self.space
    }

    /// Rank of the underlying space.
    pub fn rank(&self) -> Rank {
        self.space.rank()
    }

    /// Number of vector components of the underlying space.
    pub fn num_components(&self) -> usize {
        self.space.num_components()
    }

    /// Which domain the buffer currently represents, re-derived from
    /// its layout.
    pub fn domain(&self) -> Domain {
        derive_domain(&self.space, &self.buffer)
    }

    /// The owned buffer.
    pub fn buffer(&self) -> &NdBuffer {
        &self.buffer
    }

    /// Mutable access to the owned buffer's elements.
    pub fn buffer_mut(&mut self) -> &mut NdBuffer {
        &mut self.buffer
    }

    /// Convert into a [`Function`], reusing the buffer without copying.
    ///
    /// The result carries a value-role basis handle and may appear in
    /// expressions; its domain is inferred by the same
    /// matches-forward-output rule used everywhere else.
    pub fn as_function(self) -> Function {
        Function::from_validated_parts(BasisFunction::value(self.space), self.buffer)
    }
}

impl NumericBuffer for Array {
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use weft_form::{Argument, Expr};
    use weft_test_utils::{r2c_space, vector_r2c_space_2d};

    #[test]
    fn shape_derivation_matches_function() {
        let a = Array::new(r2c_space(8), Domain::Physical);
        assert_eq!(a.shape(), &[8]);
        assert_eq!(a.kind(), ScalarKind::Real);
        assert_eq!(a.domain(), Domain::Physical);

        let a = Array::new(vector_r2c_space_2d(8, 8), Domain::Coefficient);
        assert_eq!(a.shape(), &[2, 8, 5]);
        assert_eq!(a.kind(), ScalarKind::Complex);
        assert_eq!(a.rank(), Rank::Vector);
    }

    #[test]
    fn conversion_round_trip_preserves_buffer() {
        let space = r2c_space(8);
        let mut a = Array::new(space, Domain::Physical);
        if let crate::BufferData::Real(data) = a.buffer_mut().data_mut() {
            data[3] = 7.0;
        }
        let len = a.len();

        let f = a.as_function();
        assert_eq!(f.argument(), Argument::Value);
        assert_eq!(f.len(), len);
        assert_eq!(f.domain(), Domain::Physical);
        assert_eq!(f.buffer().as_real().unwrap()[3], 7.0);

        let back = f.as_array();
        assert_eq!(back.len(), len);
        assert_eq!(back.buffer().as_real().unwrap()[3], 7.0);
        assert_eq!(back.domain(), Domain::Physical);
    }

    #[test]
    fn array_has_no_role_until_converted() {
        let a = Array::new(r2c_space(8), Domain::Coefficient);
        // Only through as_function does the buffer gain an argument
        // role the algebra accepts.
        let e = Expr::from(&a.as_function());
        assert_eq!(e.argument(), Argument::Value);
    }

    #[test]
    fn from_buffer_validates_layout() {
        let space = r2c_space(8);
        let bad = NdBuffer::zeros([7], ScalarKind::Real);
        let err = Array::from_buffer(space, bad).unwrap_err();
        assert!(matches!(err, FieldError::ShapeMismatch { .. }));
    }

    fn arb_physical_buffer() -> impl Strategy<Value = (usize, Vec<f64>)> {
        (2usize..32).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(-100.0..100.0f64, n..=n),
            )
        })
    }

    proptest! {
        #[test]
        fn conversion_round_trip_preserves_contents((n, data) in arb_physical_buffer()) {
            let space = r2c_space(n);
            let buffer = NdBuffer::from_real([n], data.clone()).unwrap();
            let a = Array::from_buffer(space, buffer).unwrap();
            prop_assert_eq!(a.domain(), Domain::Physical);

            let f = a.as_function();
            prop_assert_eq!(f.domain(), Domain::Physical);
            prop_assert_eq!(f.buffer().as_real().unwrap(), data.as_slice());

            let back = f.as_array();
            prop_assert_eq!(back.buffer().as_real().unwrap(), data.as_slice());
            prop_assert_eq!(back.kind(), ScalarKind::Real);
        }
    }
}
