//! Basis functions and the term-algebra engine for Weft weak forms.
//!
//! This crate is the heart of the layer: [`BasisFunction`] handles tag an
//! operand with its role in a form (test, trial, or known value), and
//! [`Expr`] records which derivatives, with what coefficients, on which
//! vector components — as a structured value, without evaluating anything.
//! A downstream assembly engine walks the finished structure.
//!
//! # Building forms
//!
//! ```
//! use weft_form::{BasisFunction, Expr};
//! use weft_test_utils::scalar_space_2d;
//!
//! let space = scalar_space_2d(8, 8);
//! let v = BasisFunction::test(space);
//!
//! // The Laplacian of v, built term by term: d²v/dx² + d²v/dy².
//! let mut lap = Expr::from(&v);
//! *lap.terms_mut().get_mut(&[0, 0, 0]).unwrap() = 2;
//! let mut dyy = Expr::from(&v);
//! *dyy.terms_mut().get_mut(&[0, 0, 1]).unwrap() = 2;
//! let lap = lap.try_add(&dyy).unwrap();
//!
//! assert_eq!(lap.num_terms(), 2);
//! assert_eq!(lap.terms().data(), &[2, 0, 0, 2]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod argument;
pub mod basis;
pub mod error;
pub mod expr;
pub mod ops;

pub use argument::Argument;
pub use basis::BasisFunction;
pub use error::FormError;
pub use expr::{Expr, ScaleFactor, Sign};
