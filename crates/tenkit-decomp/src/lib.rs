//! # tenkit-decomp - Factorized Tensor Representations
//!
//! Validated containers for the three classic tensor factorizations, each
//! able to reconstruct the dense tensor it represents.
//!
//! ### CP (Canonical Polyadic / CANDECOMP/PARAFAC)
//!
//! A weighted sum of R rank-1 components:
//!
//! ```text
//! X = Σᵣ λᵣ (a₁ᵣ ⊗ a₂ᵣ ⊗ ... ⊗ aₙᵣ)
//! ```
//!
//! ### Tucker
//!
//! A core tensor multiplied by one factor matrix per mode:
//!
//! ```text
//! X = G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ
//! ```
//!
//! ### Tensor Train (TT)
//!
//! A chain of 3-way cores:
//!
//! ```text
//! X(i₁,...,iₙ) = G₁[i₁] × G₂[i₂] × ... × Gₙ[iₙ]
//! ```
//!
//! Constructors check the shape invariants once and fail with a
//! `ShapeMismatch` error; `reconstruct` is then exact and always succeeds
//! for a validly constructed value.
//!
//! ## Quick Start
//!
//! ```
//! use scirs2_core::ndarray_ext::{array, Array2, Array3};
//! use tenkit_core::DenseND;
//! use tenkit_decomp::{CpDecomp, TTDecomp, TuckerDecomp};
//!
//! let cp = CpDecomp::new(
//!     vec![Array2::<f64>::ones((4, 2)), Array2::ones((5, 2))],
//!     array![1.0, 0.5],
//! )?;
//! assert_eq!(cp.reconstruct()?.shape(), &[4, 5]);
//!
//! let tucker = TuckerDecomp::new(
//!     DenseND::<f64>::ones(&[2, 2]),
//!     vec![Array2::ones((6, 2)), Array2::ones((7, 2))],
//! )?;
//! assert_eq!(tucker.rank(), vec![2, 2]);
//!
//! let tt = TTDecomp::new(vec![Array3::<f64>::ones((1, 3, 2)), Array3::ones((2, 3, 1))])?;
//! assert_eq!(tt.reconstruct()?.shape(), &[3, 3]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## References
//!
//! - Kolda & Bader (2009), "Tensor Decompositions and Applications"
//! - Oseledets (2011), "Tensor-Train Decomposition"

#![deny(warnings)]

pub mod cp;
pub mod tt;
pub mod tucker;
mod utils;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use cp::*;
pub use tt::*;
pub use tucker::*;
