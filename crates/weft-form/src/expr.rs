//! The term-algebra engine: component × term × derivative-order tensors.

use crate::argument::Argument;
use crate::basis::BasisFunction;
use crate::error::FormError;
use weft_core::{Rank, SpaceRef, Tensor};

/// Direction of a structural combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Append the right operand's terms as they are.
    Plus,
    /// Append the right operand's terms with negated scales.
    Minus,
}

/// Operand of a scaling operation.
///
/// Scalar expressions accept only [`Uniform`](Self::Uniform) factors;
/// vector expressions additionally accept one factor per component.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleFactor {
    /// One factor applied to every term of every component.
    Uniform(f64),
    /// One factor per component, applied row-wise.
    PerComponent(Vec<f64>),
}

impl From<f64> for ScaleFactor {
    fn from(a: f64) -> Self {
        Self::Uniform(a)
    }
}

impl From<Vec<f64>> for ScaleFactor {
    fn from(a: Vec<f64>) -> Self {
        Self::PerComponent(a)
    }
}

impl From<&[f64]> for ScaleFactor {
    fn from(a: &[f64]) -> Self {
        Self::PerComponent(a.to_vec())
    }
}

/// A spectral Galerkin form: a sum of derivative terms over a basis
/// function.
///
/// The structure is three parallel tensors over C components, T summed
/// terms, and D spatial dimensions:
///
/// - `terms`, shape `(C, T, D)`: `terms[c, t, d]` is the derivative
///   order applied along axis `d` for term `t` contributing to output
///   component `c`. The Laplacian of a scalar in 2D is
///   `[[[2, 0], [0, 2]]]`: two terms, each twice differentiated along
///   one axis.
/// - `scales`, shape `(C, T)`: scalar weight of each term.
/// - `indices`, shape `(C, T)`: target vector component of each term,
///   used by the assembly engine when the basis is vector-valued.
///
/// Nothing is ever evaluated numerically here; an `Expr` is a pure
/// description that a downstream assembly engine interprets term by
/// term. Non-in-place operations return new values and leave the
/// receiver untouched; the `*_assign` operations mutate the receiver's
/// tensors and require external serialization if an instance is shared.
///
/// The fallible named operations ([`try_add`](Self::try_add),
/// [`try_scale`](Self::try_scale), …) are the canonical contract; the
/// `std::ops` impls in [`ops`](crate::ops) are sugar over them that
/// panics on misuse.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    basis: BasisFunction,
    terms: Tensor<u32>,
    scales: Tensor<f64>,
    indices: Tensor<u32>,
}

impl Expr {
    /// The one-term identity expression of a basis function: all
    /// derivative orders zero, unit scales, indices covering the
    /// component range.
    pub fn from_basis(basis: BasisFunction) -> Self {
        let c = basis.num_components();
        let d = basis.ndim();
        let terms = Tensor::filled([c, 1, d], 0u32);
        let scales = Tensor::filled([c, 1], 1.0);
        let mut indices = Tensor::filled([c, 1], 0u32);
        for (i, slot) in indices.data_mut().iter_mut().enumerate() {
            *slot = i as u32;
        }
        Self {
            basis,
            terms,
            scales,
            indices,
        }
    }

    /// Build an expression from explicit tensors, revalidating every
    /// shape invariant.
    ///
    /// Used by differential-operator producers and by the algebra's own
    /// operations. Fails with [`FormError::ShapeConsistency`] unless:
    /// `terms` has shape `(C, T, D)`; `scales` and `indices` both have
    /// shape `(C, T)`; `D` equals the space's dimension count; and `C`
    /// equals the space's component count.
    pub fn from_parts(
        basis: BasisFunction,
        terms: Tensor<u32>,
        scales: Tensor<f64>,
        indices: Tensor<u32>,
    ) -> Result<Self, FormError> {
        if terms.ndim() != 3 {
            return Err(FormError::ShapeConsistency {
                reason: format!(
                    "terms must have axes (component, term, order), got {} axes",
                    terms.ndim()
                ),
            });
        }
        let (c, t, d) = (terms.shape()[0], terms.shape()[1], terms.shape()[2]);
        if scales.shape() != [c, t] {
            return Err(FormError::ShapeConsistency {
                reason: format!(
                    "scales shape {:?} does not match terms leading extents ({c}, {t})",
                    scales.shape()
                ),
            });
        }
        if indices.shape() != [c, t] {
            return Err(FormError::ShapeConsistency {
                reason: format!(
                    "indices shape {:?} does not match terms leading extents ({c}, {t})",
                    indices.shape()
                ),
            });
        }
        if d != basis.ndim() {
            return Err(FormError::ShapeConsistency {
                reason: format!(
                    "terms carry {d} derivative axes but the space has {} dimensions",
                    basis.ndim()
                ),
            });
        }
        if c != basis.num_components() {
            return Err(FormError::ShapeConsistency {
                reason: format!(
                    "terms carry {c} components but the space has {}",
                    basis.num_components()
                ),
            });
        }
        Ok(Self {
            basis,
            terms,
            scales,
            indices,
        })
    }

    // ── Accessors ────────────────────────────────────────────────

    /// The basis function this expression is built over.
    pub fn basis(&self) -> &BasisFunction {
        &self.basis
    }

    /// The function space of the basis.
    pub fn function_space(&self) -> &SpaceRef {
        self.basis.function_space()
    }

    /// Argument role of the basis.
    pub fn argument(&self) -> Argument {
        self.basis.argument()
    }

    /// Derivative-order tensor, shape `(C, T, D)`.
    pub fn terms(&self) -> &Tensor<u32> {
        &self.terms
    }

    /// Mutable derivative-order tensor.
    pub fn terms_mut(&mut self) -> &mut Tensor<u32> {
        &mut self.terms
    }

    /// Scale tensor, shape `(C, T)`.
    pub fn scales(&self) -> &Tensor<f64> {
        &self.scales
    }

    /// Mutable scale tensor.
    pub fn scales_mut(&mut self) -> &mut Tensor<f64> {
        &mut self.scales
    }

    /// Target-component tensor, shape `(C, T)`.
    pub fn indices(&self) -> &Tensor<u32> {
        &self.indices
    }

    /// Mutable target-component tensor.
    pub fn indices_mut(&mut self) -> &mut Tensor<u32> {
        &mut self.indices
    }

    /// Number of output components C.
    pub fn num_components(&self) -> usize {
        self.terms.shape()[0]
    }

    /// Number of summed terms T.
    pub fn num_terms(&self) -> usize {
        self.terms.shape()[1]
    }

    /// Number of spatial dimensions D.
    pub fn dim(&self) -> usize {
        self.terms.shape()[2]
    }

    /// Rank derived from the component count.
    pub fn expr_rank(&self) -> Rank {
        Rank::of(self.num_components())
    }

    /// Rank of the underlying basis.
    pub fn rank(&self) -> Rank {
        self.basis.rank()
    }

    /// Derivative order of term `t`, component `c`, along axis `d`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn order(&self, c: usize, t: usize, d: usize) -> u32 {
        self.terms[&[c, t, d][..]]
    }

    /// Scale of term `t`, component `c`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn scale(&self, c: usize, t: usize) -> f64 {
        self.scales[&[c, t][..]]
    }

    /// Target vector component of term `t`, component `c`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn target(&self, c: usize, t: usize) -> u32 {
        self.indices[&[c, t][..]]
    }

    // ── Algebra ──────────────────────────────────────────────────

    /// Structurally combine two expressions: concatenate terms, scales,
    /// and indices along the term axis, negating the right operand's
    /// scales for [`Sign::Minus`].
    ///
    /// Both operands must have the same component count, live on the
    /// same space instance, and carry the same argument role; otherwise
    /// this fails with [`FormError::IncompatibleOperands`]. No numeric
    /// work happens: `num_terms` of the result is always the sum of the
    /// operands'.
    pub fn try_combine(&self, other: &Expr, sign: Sign) -> Result<Expr, FormError> {
        self.check_compatible(other)?;
        let rhs_scales = match sign {
            Sign::Plus => other.scales.clone(),
            Sign::Minus => other.scales.map(|s| -s),
        };
        Ok(Self {
            basis: self.basis.clone(),
            terms: Tensor::concat_axis1(&self.terms, &other.terms)?,
            scales: Tensor::concat_axis1(&self.scales, &rhs_scales)?,
            indices: Tensor::concat_axis1(&self.indices, &other.indices)?,
        })
    }

    /// `self + other` as a new expression.
    pub fn try_add(&self, other: &Expr) -> Result<Expr, FormError> {
        self.try_combine(other, Sign::Plus)
    }

    /// `self - other` as a new expression.
    pub fn try_sub(&self, other: &Expr) -> Result<Expr, FormError> {
        self.try_combine(other, Sign::Minus)
    }

    /// In-place combination: replaces the receiver's tensors with the
    /// concatenated ones. The receiver keeps its identity.
    pub fn combine_assign(&mut self, other: &Expr, sign: Sign) -> Result<(), FormError> {
        let combined = self.try_combine(other, sign)?;
        self.terms = combined.terms;
        self.scales = combined.scales;
        self.indices = combined.indices;
        Ok(())
    }

    /// Scale the expression, returning a new value and leaving the
    /// receiver untouched.
    ///
    /// A [`ScaleFactor::Uniform`] factor multiplies every term's scale.
    /// A [`ScaleFactor::PerComponent`] factor is accepted only for
    /// vector expressions and must carry one factor per spatial
    /// dimension; anything else fails with
    /// [`FormError::UnsupportedOperation`].
    pub fn try_scale(&self, factor: impl Into<ScaleFactor>) -> Result<Expr, FormError> {
        let mut out = self.clone();
        out.scale_assign(factor)?;
        Ok(out)
    }

    /// Scale the expression in place, mutating the receiver's scale
    /// tensor directly.
    pub fn scale_assign(&mut self, factor: impl Into<ScaleFactor>) -> Result<(), FormError> {
        match factor.into() {
            ScaleFactor::Uniform(a) => {
                for s in self.scales.data_mut() {
                    *s *= a;
                }
                Ok(())
            }
            ScaleFactor::PerComponent(factors) => {
                if self.expr_rank() != Rank::Vector {
                    return Err(FormError::UnsupportedOperation {
                        reason: "per-component scaling of a scalar expression".into(),
                    });
                }
                if factors.len() != self.dim() {
                    return Err(FormError::UnsupportedOperation {
                        reason: format!(
                            "expected {} factors (one per spatial dimension), got {}",
                            self.dim(),
                            factors.len()
                        ),
                    });
                }
                if factors.len() != self.num_components() {
                    return Err(FormError::UnsupportedOperation {
                        reason: format!(
                            "per-component scaling needs component count {} to match \
                             dimension count {}",
                            self.num_components(),
                            self.dim()
                        ),
                    });
                }
                for (c, a) in factors.iter().enumerate() {
                    for s in self.scales.block_axis0_mut(c) {
                        *s *= a;
                    }
                }
                Ok(())
            }
        }
    }

    /// The negated expression: scales flipped, terms and indices copied
    /// unchanged. A sign flip never changes derivative structure.
    pub fn negated(&self) -> Expr {
        Self {
            basis: self.basis.clone(),
            terms: self.terms.clone(),
            scales: self.scales.map(|s| -s),
            indices: self.indices.clone(),
        }
    }

    /// Extract component `i`: a scalar expression over the `i`-th
    /// sub-space whose tensors are the `i`-th slice along the component
    /// axis.
    ///
    /// Only valid for vector expressions; fails with
    /// [`FormError::ComponentIndex`] otherwise or for `i` out of range.
    /// A vector form can be decomposed per component, manipulated, and
    /// reassembled by addition.
    pub fn component(&self, i: usize) -> Result<Expr, FormError> {
        if self.expr_rank() != Rank::Vector {
            return Err(FormError::ComponentIndex {
                index: i,
                num_components: 1,
            });
        }
        if i >= self.num_components() {
            return Err(FormError::ComponentIndex {
                index: i,
                num_components: self.num_components(),
            });
        }
        Ok(Self {
            basis: self.basis.component(i)?,
            terms: self.terms.slice_axis0(i),
            scales: self.scales.slice_axis0(i),
            indices: self.indices.slice_axis0(i),
        })
    }

    fn check_compatible(&self, other: &Expr) -> Result<(), FormError> {
        if self.num_components() != other.num_components() {
            return Err(FormError::IncompatibleOperands {
                reason: format!(
                    "component counts differ: {} vs {}",
                    self.num_components(),
                    other.num_components()
                ),
            });
        }
        if !self
            .function_space()
            .same_space(other.function_space().as_ref())
        {
            return Err(FormError::IncompatibleOperands {
                reason: "operands live on different function spaces".into(),
            });
        }
        if self.argument() != other.argument() {
            return Err(FormError::IncompatibleOperands {
                reason: format!(
                    "cannot combine a {} operand with a {} operand",
                    self.argument(),
                    other.argument()
                ),
            });
        }
        Ok(())
    }
}

impl From<BasisFunction> for Expr {
    fn from(basis: BasisFunction) -> Self {
        Self::from_basis(basis)
    }
}

impl From<&BasisFunction> for Expr {
    fn from(basis: &BasisFunction) -> Self {
        Self::from_basis(basis.clone())
    }
}

impl From<&Expr> for Expr {
    /// Deep copy, so operator producers can take `impl Into<Expr>` and
    /// accept basis functions and expressions alike.
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use weft_test_utils::{scalar_space_2d, vector_space_2d};

    fn test_expr_2d() -> Expr {
        Expr::from_basis(BasisFunction::test(scalar_space_2d(8, 8)))
    }

    /// The 2D Laplacian of a scalar test function, built term by term.
    fn laplacian_2d() -> Expr {
        let v = BasisFunction::test(scalar_space_2d(8, 8));
        let mut dxx = Expr::from_basis(v.clone());
        *dxx.terms_mut().get_mut(&[0, 0, 0]).unwrap() = 2;
        let mut dyy = Expr::from_basis(v);
        *dyy.terms_mut().get_mut(&[0, 0, 1]).unwrap() = 2;
        dxx.try_add(&dyy).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn identity_expr_from_basis() {
        let e = test_expr_2d();
        assert_eq!(e.num_components(), 1);
        assert_eq!(e.num_terms(), 1);
        assert_eq!(e.dim(), 2);
        assert_eq!(e.expr_rank(), Rank::Scalar);
        assert_eq!(e.terms().data(), &[0, 0]);
        assert_eq!(e.scales().data(), &[1.0]);
        assert_eq!(e.indices().data(), &[0]);
    }

    #[test]
    fn identity_expr_vector_indices_cover_components() {
        let e = Expr::from_basis(BasisFunction::trial(vector_space_2d(8, 8)));
        assert_eq!(e.num_components(), 2);
        assert_eq!(e.expr_rank(), Rank::Vector);
        assert_eq!(e.indices().data(), &[0, 1]);
    }

    #[test]
    fn from_parts_validates_tensor_shapes() {
        let v = BasisFunction::test(scalar_space_2d(8, 8));
        // scales sized for two terms, terms sized for one.
        let err = Expr::from_parts(
            v.clone(),
            Tensor::filled([1, 1, 2], 0u32),
            Tensor::filled([1, 2], 1.0),
            Tensor::filled([1, 1], 0u32),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::ShapeConsistency { .. }));

        // terms with the wrong number of axes.
        let err = Expr::from_parts(
            v.clone(),
            Tensor::filled([1, 2], 0u32),
            Tensor::filled([1, 2], 1.0),
            Tensor::filled([1, 2], 0u32),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::ShapeConsistency { .. }));

        // derivative axes disagree with the space's dimensions.
        let err = Expr::from_parts(
            v.clone(),
            Tensor::filled([1, 1, 3], 0u32),
            Tensor::filled([1, 1], 1.0),
            Tensor::filled([1, 1], 0u32),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::ShapeConsistency { .. }));

        // component axis disagrees with the space's component count.
        let err = Expr::from_parts(
            v,
            Tensor::filled([2, 1, 2], 0u32),
            Tensor::filled([2, 1], 1.0),
            Tensor::filled([2, 1], 0u32),
        )
        .unwrap_err();
        assert!(matches!(err, FormError::ShapeConsistency { .. }));
    }

    // ── Spec'd concrete scenarios ───────────────────────────────

    #[test]
    fn laplacian_tensors() {
        let lap = laplacian_2d();
        assert_eq!(lap.num_terms(), 2);
        assert_eq!(lap.dim(), 2);
        assert_eq!(lap.num_components(), 1);
        assert_eq!(lap.terms().shape(), &[1, 2, 2]);
        assert_eq!(lap.terms().data(), &[2, 0, 0, 2]);
        assert_eq!(lap.scales().data(), &[1.0, 1.0]);
        assert_eq!(lap.indices().data(), &[0, 0]);
    }

    #[test]
    fn negation_flips_scales_only() {
        let lap = laplacian_2d();
        let neg = lap.negated();
        assert_eq!(neg.scales().data(), &[-1.0, -1.0]);
        assert_eq!(neg.terms(), lap.terms());
        assert_eq!(neg.indices(), lap.indices());
    }

    #[test]
    fn vector_component_slice() {
        let e = Expr::from_basis(BasisFunction::trial(vector_space_2d(8, 8)));
        assert_eq!(e.terms().shape(), &[2, 1, 2]);
        let e0 = e.component(0).unwrap();
        assert_eq!(e0.terms().shape(), &[1, 1, 2]);
        assert_eq!(e0.terms(), &e.terms().slice_axis0(0));
        assert_eq!(e0.scales().data(), &[1.0]);
        assert_eq!(e0.indices().data(), &[0]);
        let e1 = e.component(1).unwrap();
        assert_eq!(e1.indices().data(), &[1]);
        assert_eq!(e1.basis().index(), 1);
    }

    // ── Combination gates ───────────────────────────────────────

    #[test]
    fn add_across_spaces_fails() {
        let a = Expr::from_basis(BasisFunction::test(scalar_space_2d(8, 8)));
        let b = Expr::from_basis(BasisFunction::test(scalar_space_2d(8, 8)));
        let err = a.try_add(&b).unwrap_err();
        assert!(matches!(err, FormError::IncompatibleOperands { .. }));
    }

    #[test]
    fn add_across_roles_fails() {
        let space = scalar_space_2d(8, 8);
        let v = Expr::from_basis(BasisFunction::test(space.clone()));
        let u = Expr::from_basis(BasisFunction::trial(space));
        let err = v.try_add(&u).unwrap_err();
        assert!(matches!(err, FormError::IncompatibleOperands { .. }));
    }

    #[test]
    fn sub_negates_right_scales() {
        let e = test_expr_2d();
        let f = e.clone();
        let diff = e.try_sub(&f).unwrap();
        assert_eq!(diff.num_terms(), 2);
        assert_eq!(diff.scales().data(), &[1.0, -1.0]);
    }

    #[test]
    fn combine_assign_mutates_receiver() {
        let mut e = test_expr_2d();
        let f = e.clone();
        e.combine_assign(&f, Sign::Plus).unwrap();
        assert_eq!(e.num_terms(), 2);
        e.combine_assign(&f, Sign::Minus).unwrap();
        assert_eq!(e.num_terms(), 3);
        assert_eq!(e.scales().data(), &[1.0, 1.0, -1.0]);
    }

    // ── Scaling ─────────────────────────────────────────────────

    #[test]
    fn uniform_scale_returns_new_value() {
        let e = laplacian_2d();
        let scaled = e.try_scale(3.0).unwrap();
        assert_eq!(scaled.scales().data(), &[3.0, 3.0]);
        // Receiver untouched.
        assert_eq!(e.scales().data(), &[1.0, 1.0]);
        assert_eq!(scaled.terms(), e.terms());
        assert_eq!(scaled.indices(), e.indices());
    }

    #[test]
    fn scale_assign_mutates_in_place() {
        let mut e = laplacian_2d();
        let terms_before = e.terms().clone();
        e.scale_assign(-2.0).unwrap();
        assert_eq!(e.scales().data(), &[-2.0, -2.0]);
        assert_eq!(e.terms(), &terms_before);
    }

    #[test]
    fn per_component_scale_on_scalar_fails() {
        let e = test_expr_2d();
        let err = e.try_scale(vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, FormError::UnsupportedOperation { .. }));
    }

    #[test]
    fn per_component_scale_wrong_arity_fails() {
        let e = Expr::from_basis(BasisFunction::trial(vector_space_2d(8, 8)));
        let err = e.try_scale(vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, FormError::UnsupportedOperation { .. }));
    }

    #[test]
    fn per_component_scale_applies_row_wise() {
        let e = Expr::from_basis(BasisFunction::trial(vector_space_2d(8, 8)));
        let scaled = e.try_scale(vec![2.0, 3.0]).unwrap();
        assert_eq!(scaled.scales().data(), &[2.0, 3.0]);
        assert_eq!(e.scales().data(), &[1.0, 1.0]);
    }

    #[test]
    fn component_on_scalar_expr_fails() {
        let e = test_expr_2d();
        let err = e.component(0).unwrap_err();
        assert!(matches!(err, FormError::ComponentIndex { .. }));
    }

    #[test]
    fn decompose_and_reassemble() {
        let e = Expr::from_basis(BasisFunction::trial(vector_space_2d(8, 8)));
        let e0 = e.component(0).unwrap();
        let e1 = e.component(1).unwrap();
        // Components live on different (scalar) sub-spaces; they cannot
        // be summed with each other, but each can grow independently.
        assert!(e0.try_add(&e1).is_err());
        let doubled = e0.try_add(&e0).unwrap();
        assert_eq!(doubled.num_terms(), 2);
    }

    // ── Algebraic laws ──────────────────────────────────────────

    fn arb_expr_pair() -> impl Strategy<Value = (Expr, Expr)> {
        (1usize..5, 1usize..5).prop_flat_map(|(ta, tb)| {
            (
                prop::collection::vec(0u32..4, ta * 2),
                prop::collection::vec(-4.0..4.0f64, ta),
                prop::collection::vec(0u32..4, tb * 2),
                prop::collection::vec(-4.0..4.0f64, tb),
            )
                .prop_map(move |(oa, sa, ob, sb)| {
                    let v = BasisFunction::test(scalar_space_2d(8, 8));
                    let a = Expr::from_parts(
                        v.clone(),
                        Tensor::from_vec([1, ta, 2], oa).unwrap(),
                        Tensor::from_vec([1, ta], sa).unwrap(),
                        Tensor::filled([1, ta], 0u32),
                    )
                    .unwrap();
                    let b = Expr::from_parts(
                        v,
                        Tensor::from_vec([1, tb, 2], ob).unwrap(),
                        Tensor::from_vec([1, tb], sb).unwrap(),
                        Tensor::filled([1, tb], 0u32),
                    )
                    .unwrap();
                    (a, b)
                })
        })
    }

    proptest! {
        #[test]
        fn double_negation_is_identity((a, _) in arb_expr_pair()) {
            prop_assert_eq!(a.negated().negated(), a);
        }

        #[test]
        fn term_counts_add((a, b) in arb_expr_pair()) {
            let sum = a.try_add(&b).unwrap();
            prop_assert_eq!(sum.num_terms(), a.num_terms() + b.num_terms());
            let diff = a.try_sub(&b).unwrap();
            prop_assert_eq!(diff.num_terms(), a.num_terms() + b.num_terms());
        }

        #[test]
        fn sub_is_add_of_negation((a, b) in arb_expr_pair()) {
            prop_assert_eq!(
                a.try_sub(&b).unwrap(),
                a.try_add(&b.negated()).unwrap()
            );
        }

        #[test]
        fn scale_round_trip((a, _) in arb_expr_pair(), s in 0.5f64..4.0) {
            let back = a.try_scale(s).unwrap().try_scale(1.0 / s).unwrap();
            prop_assert_eq!(back.terms(), a.terms());
            prop_assert_eq!(back.indices(), a.indices());
            for (x, y) in back.scales().data().iter().zip(a.scales().data()) {
                prop_assert!((x - y).abs() < 1e-12);
            }
        }
    }
}
