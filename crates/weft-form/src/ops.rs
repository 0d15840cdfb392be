//! `std::ops` sugar over the named form-algebra operations.
//!
//! The fallible named methods on [`Expr`] are the canonical contract;
//! these impls delegate to them and panic with the underlying
//! [`FormError`](crate::FormError) message on misuse, so that forms can
//! be written the way they read mathematically:
//!
//! ```
//! use weft_form::{BasisFunction, Expr};
//! use weft_test_utils::scalar_space_2d;
//!
//! let space = scalar_space_2d(8, 8);
//! let v = BasisFunction::test(space);
//! let e = 2.0 * &Expr::from(&v) - &v;
//! assert_eq!(e.num_terms(), 2);
//! assert_eq!(e.scales().data(), &[2.0, -1.0]);
//! ```
//!
//! The value/in-place distinction follows the trait split: `Add`/`Sub`/
//! `Mul`/`Neg` return new expressions, `AddAssign`/`SubAssign`/
//! `MulAssign` mutate the receiver. A bare [`BasisFunction`] has no term
//! storage to mutate, so the assign traits are deliberately not
//! implemented for it; lift it into an [`Expr`] first.

use crate::basis::BasisFunction;
use crate::error::FormError;
use crate::expr::{Expr, ScaleFactor};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn checked<T>(result: Result<T, FormError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

// ── Expr ─────────────────────────────────────────────────────────

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.negated()
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.negated()
    }
}

impl Add<&Expr> for &Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible; use
    /// [`Expr::try_add`] for fallible combination.
    fn add(self, rhs: &Expr) -> Expr {
        checked(self.try_add(rhs))
    }
}

impl Add<&BasisFunction> for &Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add(self, rhs: &BasisFunction) -> Expr {
        checked(self.try_add(&Expr::from(rhs)))
    }
}

impl Sub<&Expr> for &Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible; use
    /// [`Expr::try_sub`] for fallible combination.
    fn sub(self, rhs: &Expr) -> Expr {
        checked(self.try_sub(rhs))
    }
}

impl Sub<&BasisFunction> for &Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub(self, rhs: &BasisFunction) -> Expr {
        checked(self.try_sub(&Expr::from(rhs)))
    }
}

impl Mul<f64> for &Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Expr {
        checked(self.try_scale(rhs))
    }
}

impl Mul<&Expr> for f64 {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        checked(rhs.try_scale(self))
    }
}

impl AddAssign<&Expr> for Expr {
    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add_assign(&mut self, rhs: &Expr) {
        checked(self.combine_assign(rhs, crate::Sign::Plus));
    }
}

impl AddAssign<&BasisFunction> for Expr {
    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add_assign(&mut self, rhs: &BasisFunction) {
        checked(self.combine_assign(&Expr::from(rhs), crate::Sign::Plus));
    }
}

impl SubAssign<&Expr> for Expr {
    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub_assign(&mut self, rhs: &Expr) {
        checked(self.combine_assign(rhs, crate::Sign::Minus));
    }
}

impl SubAssign<&BasisFunction> for Expr {
    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub_assign(&mut self, rhs: &BasisFunction) {
        checked(self.combine_assign(&Expr::from(rhs), crate::Sign::Minus));
    }
}

impl MulAssign<f64> for Expr {
    fn mul_assign(&mut self, rhs: f64) {
        checked(self.scale_assign(rhs));
    }
}

// Owned-receiver variants so operator chains compose without
// intermediate bindings.

impl Add<&Expr> for Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add(self, rhs: &Expr) -> Expr {
        checked(self.try_add(rhs))
    }
}

impl Add<&BasisFunction> for Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add(self, rhs: &BasisFunction) -> Expr {
        checked(self.try_add(&Expr::from(rhs)))
    }
}

impl Sub<&Expr> for Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub(self, rhs: &Expr) -> Expr {
        checked(self.try_sub(rhs))
    }
}

impl Sub<&BasisFunction> for Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub(self, rhs: &BasisFunction) -> Expr {
        checked(self.try_sub(&Expr::from(rhs)))
    }
}

impl Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Expr {
        checked(self.try_scale(rhs))
    }
}

impl Mul<Expr> for f64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        checked(rhs.try_scale(self))
    }
}

impl Mul<ScaleFactor> for &Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the factor's arity is wrong for the expression's rank;
    /// use [`Expr::try_scale`] for fallible scaling.
    fn mul(self, rhs: ScaleFactor) -> Expr {
        checked(self.try_scale(rhs))
    }
}

impl Mul<ScaleFactor> for Expr {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the factor's arity is wrong for the expression's rank.
    fn mul(self, rhs: ScaleFactor) -> Expr {
        checked(self.try_scale(rhs))
    }
}

// ── BasisFunction (lifts to a one-term Expr, then delegates) ─────

impl Neg for &BasisFunction {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::from(self).negated()
    }
}

impl Add<&BasisFunction> for &BasisFunction {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add(self, rhs: &BasisFunction) -> Expr {
        checked(Expr::from(self).try_add(&Expr::from(rhs)))
    }
}

impl Add<&Expr> for &BasisFunction {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn add(self, rhs: &Expr) -> Expr {
        checked(Expr::from(self).try_add(rhs))
    }
}

impl Sub<&BasisFunction> for &BasisFunction {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub(self, rhs: &BasisFunction) -> Expr {
        checked(Expr::from(self).try_sub(&Expr::from(rhs)))
    }
}

impl Sub<&Expr> for &BasisFunction {
    type Output = Expr;

    /// # Panics
    ///
    /// Panics if the operands are incompatible.
    fn sub(self, rhs: &Expr) -> Expr {
        checked(Expr::from(self).try_sub(rhs))
    }
}

impl Mul<f64> for &BasisFunction {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Expr {
        checked(Expr::from(self).try_scale(rhs))
    }
}

impl Mul<&BasisFunction> for f64 {
    type Output = Expr;

    fn mul(self, rhs: &BasisFunction) -> Expr {
        checked(Expr::from(rhs).try_scale(self))
    }
}
