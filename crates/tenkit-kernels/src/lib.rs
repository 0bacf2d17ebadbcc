//! # tenkit-kernels
//!
//! View-level multilinear kernels used by the tenkit representations.
//!
//! Everything here works on plain `scirs2_core` arrays and views, so the
//! kernels can be applied to a [`DenseND`](tenkit_core::DenseND) through
//! [`view()`](tenkit_core::DenseND::view) as well as to the raw factor
//! matrices and cores of a decomposition.
//!
//! **Key Features:**
//! - **N-mode products** - Tensor-matrix multiplication along any mode (serial & parallel)
//! - **Tucker operator** - One matrix per mode, applied in a size-aware order
//! - **Outer products** - Rank-1 tensors and weighted sums of them (CP)
//! - **Tensor Train (TT) operations** - Chain validation, contraction, norm
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::{array, Array2};
//! use tenkit_core::DenseND;
//! use tenkit_kernels::{cp_reconstruct, nmode_product};
//!
//! // N-mode product (tensor-matrix multiplication)
//! let tensor = DenseND::<f64>::ones(&[3, 4, 5]);
//! let matrix = Array2::<f64>::ones((2, 3));
//! let result = nmode_product(&tensor.view(), &matrix.view(), 0).unwrap();
//! assert_eq!(result.shape(), &[2, 4, 5]); // mode-0 changed from 3 to 2
//!
//! // Sum of rank-1 terms
//! let a = array![[1.0, 0.0], [0.0, 1.0]];
//! let b = array![[1.0, 1.0], [2.0, 0.0], [0.0, 3.0]];
//! let weights = array![1.0, 2.0];
//! let full = cp_reconstruct(&[a.view(), b.view()], &weights.view()).unwrap();
//! assert_eq!(full.shape(), &[2, 3]);
//! assert_eq!(full[[1, 2]], 6.0);
//! ```
//!
//! ## Examples
//!
//! ```bash
//! cargo run --example nmode_tucker
//! cargo run --example tt_workflow
//! ```
//!
//! ## Features
//!
//! - `parallel` (default) - Enable `nmode_product_parallel` using rayon via `scirs2_core::parallel_ops`

#![deny(warnings)]

pub mod error;
pub mod nmode;
pub mod outer;
pub mod tt_ops;

#[cfg(test)]
mod property_tests;

pub use error::{KernelError, KernelResult};
pub use nmode::*;
pub use outer::*;
pub use tt_ops::*;
