//! Fixture function spaces driven entirely by declared descriptors.

use std::sync::Arc;
use weft_core::{
    FunctionSpace, ScalarKind, SpaceError, SpaceInstanceId, SpaceRef, TransformShape,
};

/// A concrete [`FunctionSpace`] built from declared transform
/// descriptors.
///
/// No basis functions or quadrature exist here — the space simply
/// declares what its forward transform consumes and produces, which is
/// all the form algebra and value containers ever ask of a provider.
/// A vector variant pre-builds its scalar children so that repeated
/// [`subspace`](FunctionSpace::subspace) calls return handles with
/// stable identity.
pub struct DescriptorSpace {
    forward_input: TransformShape,
    forward_output: TransformShape,
    children: Vec<SpaceRef>,
    instance_id: SpaceInstanceId,
}

impl DescriptorSpace {
    /// A scalar space from its two transform descriptors.
    pub fn scalar(forward_input: TransformShape, forward_output: TransformShape) -> SpaceRef {
        Arc::new(Self {
            forward_input,
            forward_output,
            children: Vec::new(),
            instance_id: SpaceInstanceId::next(),
        })
    }

    /// A vector space with `components` identical scalar children.
    pub fn vector(
        components: usize,
        forward_input: TransformShape,
        forward_output: TransformShape,
    ) -> SpaceRef {
        let children = (0..components)
            .map(|_| Self::scalar(forward_input.clone(), forward_output.clone()))
            .collect();
        Arc::new(Self {
            forward_input,
            forward_output,
            children,
            instance_id: SpaceInstanceId::next(),
        })
    }
}

impl FunctionSpace for DescriptorSpace {
    fn ndim(&self) -> usize {
        self.forward_input.shape.len()
    }

    fn num_components(&self) -> usize {
        self.children.len().max(1)
    }

    fn forward_input(&self) -> TransformShape {
        self.forward_input.clone()
    }

    fn forward_output(&self) -> TransformShape {
        self.forward_output.clone()
    }

    fn subspace(&self, i: usize) -> Result<SpaceRef, SpaceError> {
        if self.children.is_empty() {
            return Err(SpaceError::ScalarHasNoComponents);
        }
        self.children
            .get(i)
            .cloned()
            .ok_or(SpaceError::ComponentOutOfRange {
                index: i,
                num_components: self.children.len(),
            })
    }

    fn instance_id(&self) -> SpaceInstanceId {
        self.instance_id
    }
}

/// 1D real-to-real scalar space with `n` points and `n` coefficients.
pub fn scalar_space(n: usize) -> SpaceRef {
    DescriptorSpace::scalar(
        TransformShape::new([n], ScalarKind::Real),
        TransformShape::new([n], ScalarKind::Real),
    )
}

/// 2D real-to-real scalar space.
pub fn scalar_space_2d(n0: usize, n1: usize) -> SpaceRef {
    DescriptorSpace::scalar(
        TransformShape::new([n0, n1], ScalarKind::Real),
        TransformShape::new([n0, n1], ScalarKind::Real),
    )
}

/// 1D real-to-complex scalar space: `n` physical points,
/// `n / 2 + 1` complex coefficients.
pub fn r2c_space(n: usize) -> SpaceRef {
    DescriptorSpace::scalar(
        TransformShape::new([n], ScalarKind::Real),
        TransformShape::new([n / 2 + 1], ScalarKind::Complex),
    )
}

/// 2D real-to-complex scalar space, contracted along the last axis.
pub fn r2c_space_2d(n0: usize, n1: usize) -> SpaceRef {
    DescriptorSpace::scalar(
        TransformShape::new([n0, n1], ScalarKind::Real),
        TransformShape::new([n0, n1 / 2 + 1], ScalarKind::Complex),
    )
}

/// 2D real-to-real vector space with two components.
pub fn vector_space_2d(n0: usize, n1: usize) -> SpaceRef {
    DescriptorSpace::vector(
        2,
        TransformShape::new([n0, n1], ScalarKind::Real),
        TransformShape::new([n0, n1], ScalarKind::Real),
    )
}

/// 2D real-to-complex vector space with two components.
pub fn vector_r2c_space_2d(n0: usize, n1: usize) -> SpaceRef {
    DescriptorSpace::vector(
        2,
        TransformShape::new([n0, n1], ScalarKind::Real),
        TransformShape::new([n0, n1 / 2 + 1], ScalarKind::Complex),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::Rank;

    #[test]
    fn scalar_fixture() {
        let s = scalar_space(8);
        assert_eq!(s.ndim(), 1);
        assert_eq!(s.num_components(), 1);
        assert_eq!(s.rank(), Rank::Scalar);
        assert!(matches!(
            s.subspace(0),
            Err(SpaceError::ScalarHasNoComponents)
        ));
    }

    #[test]
    fn vector_fixture_has_stable_children() {
        let s = vector_space_2d(8, 6);
        assert_eq!(s.rank(), Rank::Vector);
        assert_eq!(s.num_components(), 2);
        let a = s.subspace(0).unwrap();
        let b = s.subspace(0).unwrap();
        assert!(a.same_space(b.as_ref()));
        assert!(!a.same_space(s.subspace(1).unwrap().as_ref()));
        assert!(matches!(
            s.subspace(2),
            Err(SpaceError::ComponentOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn field_shapes_prepend_component_axis() {
        let s = vector_r2c_space_2d(8, 8);
        assert_eq!(s.field_shape(false).as_slice(), &[2, 8, 8]);
        assert_eq!(s.field_shape(true).as_slice(), &[2, 8, 5]);
        assert_eq!(s.field_kind(true), ScalarKind::Complex);
        assert!(s.is_forward_output(&[2, 8, 5], ScalarKind::Complex));
        assert!(!s.is_forward_output(&[2, 8, 8], ScalarKind::Real));
    }

    #[test]
    fn downcast_ref_specializes() {
        let s = scalar_space(8);
        assert!(s.as_ref().downcast_ref::<DescriptorSpace>().is_some());
    }
}
