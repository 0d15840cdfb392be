//! Weft: symbolic weak-form algebra for spectral Galerkin PDE
//! frameworks.
//!
//! Users write differential-operator expressions over test functions,
//! trial functions, and concrete fields; Weft records which
//! derivatives, with what coefficients, on which vector components — as
//! a structured, composable value — without evaluating anything
//! numerically. A downstream assembly engine walks the finished
//! structure to build operator matrices or residuals.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//! use weft_test_utils::scalar_space_2d;
//!
//! // A Poisson-style bilinear form: inner(v, ∇²u - α u).
//! let space = scalar_space_2d(32, 32);
//! let u = BasisFunction::trial(space.clone());
//! let _v = BasisFunction::test(space);
//!
//! let lhs = laplacian(&u).unwrap()
//!     .try_sub(&Expr::from(&u).try_scale(2.0).unwrap())
//!     .unwrap();
//!
//! // Three structural terms: ∂²/∂x², ∂²/∂y², and the scaled identity.
//! assert_eq!(lhs.num_terms(), 3);
//! assert_eq!(lhs.terms().data(), &[2, 0, 0, 2, 0, 0]);
//! assert_eq!(lhs.scales().data(), &[1.0, 1.0, -2.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | Space contract, descriptors, tensors, IDs |
//! | [`form`] | `weft-form` | Basis functions and the Expr term algebra |
//! | [`field`] | `weft-field` | Function/Array containers and buffers |
//! | [`operators`] | `weft-operators` | Derivative producers (dx, Laplacian) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Space contract, transform descriptors, tensors, and IDs
/// (`weft-core`).
pub use weft_core as types;

/// Basis functions and the Expr term algebra (`weft-form`).
///
/// The [`form::Expr`] type is the central structure of the layer; the
/// fallible named operations on it are the canonical contract, with
/// `std::ops` sugar in [`form::ops`].
pub use weft_form as form;

/// Function/Array value containers and numeric buffers (`weft-field`).
pub use weft_field as field;

/// Differential-operator producers (`weft-operators`).
///
/// [`operators::dx`], [`operators::laplacian`], and
/// [`operators::biharmonic`] emit expressions through the public
/// algebra only.
pub use weft_operators as operators;

/// Common imports for typical Weft usage.
///
/// ```rust
/// use weft::prelude::*;
/// ```
pub mod prelude {
    // Space contract and descriptors
    pub use weft_core::{FunctionSpace, Rank, ScalarKind, SpaceRef, Tensor, TransformShape};

    // Form algebra
    pub use weft_form::{Argument, BasisFunction, Expr, ScaleFactor, Sign};

    // Value containers
    pub use weft_field::{Array, Domain, Function, NdBuffer, NumericBuffer};

    // Errors
    pub use weft_core::{ShapeError, SpaceError};
    pub use weft_field::FieldError;
    pub use weft_form::FormError;

    // Operators
    pub use weft_operators::{biharmonic, dx, laplacian};
}
