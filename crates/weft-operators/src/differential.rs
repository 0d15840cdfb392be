//! Derivative producers: [`dx`], [`laplacian`], [`biharmonic`].
//!
//! The derivation rule is deliberately conservative: every producer
//! preserves an expression's component count, so emitted expressions
//! always keep their component axis equal to the space's component
//! count. Composite operators that would contract or expand components
//! (a free-standing divergence of a gradient) exist only in fused form.

use weft_form::{Expr, FormError, Sign};

/// Apply `order` additional derivatives along `axis` to every term.
///
/// `dx(e, 0, 2)` turns each term's derivative tuple `(a, b, …)` into
/// `(a + 2, b, …)`. Scales, indices, and the component count are
/// untouched. Fails with [`FormError::UnsupportedOperation`] if `axis`
/// is not a valid spatial axis of the expression's space.
pub fn dx(e: impl Into<Expr>, axis: usize, order: u32) -> Result<Expr, FormError> {
    let mut out = e.into();
    if axis >= out.dim() {
        return Err(FormError::UnsupportedOperation {
            reason: format!(
                "derivative axis {axis} out of range for a {}-dimensional space",
                out.dim()
            ),
        });
    }
    let components = out.num_components();
    let terms = out.num_terms();
    for c in 0..components {
        for t in 0..terms {
            if let Some(slot) = out.terms_mut().get_mut(&[c, t, axis]) {
                *slot += order;
            }
        }
    }
    Ok(out)
}

/// The Laplacian: the sum over axes of the second derivative along
/// each axis.
///
/// For an identity expression over a D-dimensional space this emits
/// one term per axis with derivative order 2 on that axis and 0
/// elsewhere, scale 1 — the div-of-grad contract. Applying it to a
/// multi-term expression differentiates every existing term, so
/// `laplacian(laplacian(u))` composes.
pub fn laplacian(e: impl Into<Expr>) -> Result<Expr, FormError> {
    let e = e.into();
    let mut acc = dx(e.clone(), 0, 2)?;
    for axis in 1..e.dim() {
        acc.combine_assign(&dx(e.clone(), axis, 2)?, Sign::Plus)?;
    }
    Ok(acc)
}

/// The biharmonic operator ∇⁴: the Laplacian applied twice.
///
/// In 2D this emits D² = 4 terms: orders `(4,0)`, `(2,2)`, `(2,2)`,
/// `(0,4)`, the two mixed terms carrying the factor 2 of the expansion
/// as separate unit-scale contributions.
pub fn biharmonic(e: impl Into<Expr>) -> Result<Expr, FormError> {
    laplacian(laplacian(e)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_form::BasisFunction;
    use weft_test_utils::{scalar_space, scalar_space_2d, vector_space_2d};

    #[test]
    fn dx_adds_orders_to_every_term() {
        let v = BasisFunction::test(scalar_space_2d(8, 8));
        let e = dx(&v, 1, 1).unwrap();
        assert_eq!(e.terms().data(), &[0, 1]);

        // Differentiating a two-term expression touches both terms.
        let two = Expr::from(&v).try_add(&Expr::from(&v)).unwrap();
        let e = dx(two, 0, 2).unwrap();
        assert_eq!(e.terms().data(), &[2, 0, 2, 0]);
    }

    #[test]
    fn dx_axis_out_of_range() {
        let v = BasisFunction::test(scalar_space(8));
        let err = dx(&v, 1, 1).unwrap_err();
        assert!(matches!(err, FormError::UnsupportedOperation { .. }));
    }

    #[test]
    fn dx_preserves_vector_components() {
        let u = BasisFunction::trial(vector_space_2d(8, 8));
        let e = dx(&u, 0, 1).unwrap();
        assert_eq!(e.num_components(), 2);
        assert_eq!(e.terms().data(), &[1, 0, 1, 0]);
        assert_eq!(e.indices().data(), &[0, 1]);
    }

    #[test]
    fn laplacian_1d_is_second_derivative() {
        let u = BasisFunction::trial(scalar_space(8));
        let lap = laplacian(&u).unwrap();
        assert_eq!(lap.num_terms(), 1);
        assert_eq!(lap.terms().data(), &[2]);
    }

    #[test]
    fn laplacian_2d_terms() {
        let u = BasisFunction::trial(scalar_space_2d(8, 8));
        let lap = laplacian(&u).unwrap();
        assert_eq!(lap.num_terms(), 2);
        assert_eq!(lap.terms().shape(), &[1, 2, 2]);
        assert_eq!(lap.terms().data(), &[2, 0, 0, 2]);
        assert_eq!(lap.scales().data(), &[1.0, 1.0]);
        assert_eq!(lap.indices().data(), &[0, 0]);
    }

    #[test]
    fn biharmonic_2d_terms() {
        let u = BasisFunction::trial(scalar_space_2d(8, 8));
        let bih = biharmonic(&u).unwrap();
        assert_eq!(bih.num_terms(), 4);
        assert_eq!(bih.terms().data(), &[4, 0, 2, 2, 2, 2, 0, 4]);
        assert_eq!(bih.scales().data(), &[1.0; 4]);
    }
}
