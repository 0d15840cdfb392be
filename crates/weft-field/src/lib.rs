//! Concrete field containers bound to function spaces.
//!
//! A [`Function`] is a numeric buffer that also carries a value-role
//! basis handle, so it can be embedded inside a form as a known
//! quantity (a previous iterate, a forcing field). An [`Array`] is the
//! same buffer without any argument role — raw data that cannot appear
//! in the algebra until explicitly converted.
//!
//! Both derive their shape and element type from the owning space's
//! forward-transform descriptors rather than storing them redundantly:
//! a container either has the layout of the transform's input (physical
//! space) or of its output (coefficient space), with a leading
//! component axis for vector-valued spaces. Whether a given buffer is
//! physical or coefficient data is re-derived on demand by matching it
//! against the output descriptor — a raw buffer carries no space typing
//! of its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod buffer;
pub mod domain;
pub mod error;
pub mod function;

pub use array::Array;
pub use buffer::{BufferData, NdBuffer, NumericBuffer};
pub use domain::Domain;
pub use error::FieldError;
pub use function::Function;
