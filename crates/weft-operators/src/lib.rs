//! Differential-operator producers for Weft weak forms.
//!
//! Producers consume a basis function or an existing expression and
//! emit a new [`Expr`](weft_form::Expr) describing derivatives as
//! integer orders per axis. They go through the public algebra only —
//! every emitted expression satisfies the same shape invariants as one
//! built by hand.
//!
//! ```
//! use weft_form::BasisFunction;
//! use weft_operators::laplacian;
//! use weft_test_utils::scalar_space_2d;
//!
//! let u = BasisFunction::trial(scalar_space_2d(8, 8));
//! let lap = laplacian(&u).unwrap();
//! assert_eq!(lap.terms().data(), &[2, 0, 0, 2]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod differential;

pub use differential::{biharmonic, dx, laplacian};
