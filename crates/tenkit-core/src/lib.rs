//! # tenkit-core
//!
//! Dense tensor type, mode metadata and matricization for tenkit.
//!
//! This crate provides the foundational building blocks for the tenkit stack:
//!
//! - **Dense tensor representation** ([`DenseND`]) with one display name per mode
//! - **Stateful matricization** (unfold/fold) with an exact inverse
//! - **Mode-n product** of a tensor with a matrix
//! - **Array-level kernels** in [`ops`] shared with `tenkit-kernels`
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! All array storage and numeric bounds come from `scirs2-core`
//! (`scirs2_core::ndarray_ext`, `scirs2_core::numeric`). Direct use of
//! `ndarray` or `num-traits` is avoided.
//!
//! ### Memory Layout
//!
//! Tensors are C-contiguous (row-major). Every operation produces a
//! standard-layout array, so the flat element order is always well defined.
//!
//! ### Pure and In-Place Forms
//!
//! `unfold`, `fold`, `vectorize` and `mode_n_product` each come in a pure form
//! returning a new tensor and an `*_inplace` form rewriting the receiver.
//!
//! ## Quick Start
//!
//! ```
//! use tenkit_core::DenseND;
//!
//! let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
//! let tensor = DenseND::from_vec(data, &[2, 3, 4]).unwrap();
//! assert_eq!(tensor.order(), 3);
//! assert_eq!(tensor.size(), 24);
//! assert_eq!(tensor.mode_names(), &["mode-0", "mode-1", "mode-2"]);
//! ```
//!
//! ## Matricization (Unfold/Fold)
//!
//! ```
//! use tenkit_core::DenseND;
//!
//! let mut tensor = DenseND::<f64>::ones(&[2, 3, 4]);
//!
//! // Unfold along mode 1 (matricization)
//! tensor.unfold_inplace(1).unwrap();
//! assert_eq!(tensor.shape(), &[3, 8]); // 8 = 2 * 4
//!
//! // Fold back to the recorded shape, no arguments needed
//! tensor.fold_inplace().unwrap();
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! ```
//!
//! ## Mode-n Product
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use tenkit_core::DenseND;
//!
//! let tensor = DenseND::<f64>::ones(&[2, 3]);
//! let m = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
//! let y = tensor.mode_n_product(&m.view(), 0).unwrap();
//! assert_eq!(y.shape(), &[3, 3]);
//! assert_eq!(y[&[2, 0]], 11.0);
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`TensorResult`] with a typed [`TensorError`]:
//!
//! ```
//! use tenkit_core::{DenseND, TensorError};
//!
//! let tensor = DenseND::<f64>::zeros(&[2, 3]);
//!
//! // This will fail - invalid mode
//! let result = tensor.unfold(10);
//! assert!(matches!(result, Err(TensorError::InvalidMode { .. })));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//! - `tracing`: Enable [`tracing_support::init_tracing`] to install a subscriber

#![deny(warnings)]

pub mod dense;
pub mod error;
pub mod ops;
pub mod tracing_support;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use dense::UnfoldState;
pub use error::{TensorError, TensorResult};
pub use types::{default_mode_name, default_mode_names, DenseND, Mode, Order, Shape};
