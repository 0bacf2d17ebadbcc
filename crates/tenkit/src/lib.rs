//! # tenkit - Dense and Factorized Tensors
//!
//! This is the **meta crate** that re-exports all tenkit components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tenkit::prelude::*;
//!
//! // 2×3×4 tensor holding 0..23 in row-major order
//! let mut tensor = DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4])?;
//!
//! // Mode-2 unfolding is 4×6 and remembers how to fold back
//! tensor.unfold_inplace(2)?;
//! assert_eq!(tensor.shape(), &[4, 6]);
//! tensor.fold_inplace()?;
//! assert_eq!(tensor.shape(), &[2, 3, 4]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Dense Tensors ([`core`])
//!
//! `DenseND` with mode names, unfold/fold state, Frobenius norm and the
//! mode-n product.
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use tenkit::core::DenseND;
//!
//! let tensor = DenseND::<f64>::ones(&[2, 3]);
//! let scaled = tensor.mode_n_product(&array![[2.0, 0.0], [0.0, 2.0]].view(), 0).unwrap();
//! assert_eq!(scaled.to_vec(), vec![2.0; 6]);
//! ```
//!
//! ### Kernels ([`kernels`])
//!
//! N-mode products, outer products and tensor-train contractions on plain
//! array views.
//!
//! ### Factorized Representations ([`decomp`])
//!
//! `CpDecomp`, `TuckerDecomp` and `TTDecomp` with validating constructors
//! and exact reconstruction.
//!
//! ```
//! use scirs2_core::ndarray_ext::{array, Array2};
//! use tenkit::decomp::CpDecomp;
//!
//! let cp = CpDecomp::new(
//!     vec![Array2::<f64>::ones((2, 4)), Array2::ones((4, 4)), Array2::ones((5, 4))],
//!     array![0.0, 1.0, 2.0, 3.0],
//! ).unwrap();
//! assert_eq!(cp.core().shape(), &[4, 4, 4]);
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): Parallel n-mode product kernel
//! - `serde`: Serialize and deserialize `DenseND`
//! - `tracing`: Subscriber setup through `core::tracing_support::init_tracing`
//! - `full`: Enable all features

#![deny(warnings)]

// Re-export all components
pub use tenkit_core as core;
pub use tenkit_decomp as decomp;
pub use tenkit_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenkit::prelude::*;
    //!
    //! let tensor = DenseND::<f64>::zeros(&[10, 20, 30]);
    //! assert_eq!(tensor.order(), 3);
    //! ```

    // Core types
    pub use crate::core::{DenseND, Mode, TensorError, TensorResult, UnfoldState};

    // Representations
    pub use crate::decomp::{CpDecomp, CpError, TTDecomp, TTError, TuckerDecomp, TuckerError};

    // Common kernels
    pub use crate::kernels::{nmode_product, outer_product, tt_contract, KernelError};
}
