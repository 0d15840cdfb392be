//! Core types and traits for the Weft form-algebra layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`FunctionSpace`] contract that external space providers implement,
//! the transform descriptors from which buffer shapes are derived, the
//! small dense [`Tensor`] used for term bookkeeping, and the shared
//! error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod descriptor;
pub mod error;
pub mod id;
pub mod space;
pub mod tensor;

pub use descriptor::{Rank, ScalarKind, TransformShape};
pub use error::{ShapeError, SpaceError};
pub use id::SpaceInstanceId;
pub use space::{FunctionSpace, SpaceRef};
pub use tensor::Tensor;

/// Shape of a tensor or buffer.
///
/// Uses `SmallVec<[usize; 4]>` to avoid heap allocation for the 1–4
/// dimensional spaces this layer serves. Higher-dimensional shapes spill
/// to the heap transparently.
pub type Shape = smallvec::SmallVec<[usize; 4]>;
