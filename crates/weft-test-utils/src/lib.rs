//! Test utilities and fixture spaces for Weft development.
//!
//! Provides [`DescriptorSpace`], a concrete
//! [`FunctionSpace`](weft_core::FunctionSpace) built from declared
//! transform descriptors (no basis math), plus fixture constructors for
//! the space shapes the test suites use.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{
    r2c_space, r2c_space_2d, scalar_space, scalar_space_2d, vector_r2c_space_2d, vector_space_2d,
    DescriptorSpace,
};
