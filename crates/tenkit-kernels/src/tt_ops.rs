//! Tensor Train (TT) chain operations.
//!
//! A d-dimensional tensor X of size n₁ × n₂ × ... × n_d is represented as:
//!
//! ```text
//! X(i₁, i₂, ..., i_d) = G₁(i₁) · G₂(i₂) · ... · G_d(i_d)
//! ```
//!
//! where each TT core G_k has shape r_{k-1} × n_k × r_k (with r₀ = r_d = 1)
//! and G_k(i_k) is the r_{k-1} × r_k slice at index i_k.
//!
//! # Operations
//!
//! - [`validate_tt_cores`] - Check boundary ranks and adjacent rank agreement
//! - [`tt_contract`] - Contract the whole chain into the full tensor
//! - [`tt_norm`] - Frobenius norm without forming the full tensor
//!
//! # Examples
//!
//! ```rust
//! use scirs2_core::ndarray_ext::Array3;
//! use tenkit_kernels::tt_ops::*;
//!
//! let core1 = Array3::<f64>::ones((1, 4, 2));  // r0=1, n1=4, r1=2
//! let core2 = Array3::<f64>::ones((2, 3, 2));  // r1=2, n2=3, r2=2
//! let core3 = Array3::<f64>::ones((2, 5, 1));  // r2=2, n3=5, r3=1
//! let cores = vec![core1.view(), core2.view(), core3.view()];
//!
//! let full = tt_contract(&cores).unwrap();
//! assert_eq!(full.shape(), &[4, 3, 5]);
//! assert_eq!(full[[0, 0, 0]], 4.0);  // 2 × 2 paths of ones
//!
//! let norm = tt_norm(&cores).unwrap();
//! assert!((norm - (60.0f64 * 16.0).sqrt()).abs() < 1e-10);
//! ```
//!
//! # Performance
//!
//! - **Contraction**: O(∏ᵢ nᵢ × r²)
//! - **Norm**: O(∑ᵢ rᵢ⁴ nᵢ) via core contractions, independent of ∏ᵢ nᵢ

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView3, Axis, IxDyn};
use scirs2_core::numeric::{Float, Num};
use tenkit_core::ops::matmul;

/// Check that TT cores form a valid chain.
///
/// # Errors
///
/// - [`KernelError::EmptyInput`] if there are no cores
/// - [`KernelError::DimensionMismatch`] if the first left rank or the last
///   right rank is not 1, or adjacent ranks disagree
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array3;
/// use tenkit_kernels::validate_tt_cores;
///
/// let g1 = Array3::<f64>::zeros((1, 2, 3));
/// let g2 = Array3::<f64>::zeros((2, 2, 1));
/// assert!(validate_tt_cores(&[g1.view(), g2.view()]).is_err());
/// ```
pub fn validate_tt_cores<T>(cores: &[ArrayView3<T>]) -> KernelResult<()> {
    if cores.is_empty() {
        return Err(KernelError::empty_input("validate_tt_cores", "cores"));
    }

    if cores[0].shape()[0] != 1 {
        return Err(KernelError::dimension_mismatch(
            "validate_tt_cores",
            vec![1],
            vec![cores[0].shape()[0]],
            "First core must have r_left=1",
        ));
    }

    if cores[cores.len() - 1].shape()[2] != 1 {
        return Err(KernelError::dimension_mismatch(
            "validate_tt_cores",
            vec![1],
            vec![cores[cores.len() - 1].shape()[2]],
            "Last core must have r_right=1",
        ));
    }

    for i in 0..cores.len() - 1 {
        let r_right = cores[i].shape()[2];
        let r_left_next = cores[i + 1].shape()[0];

        if r_right != r_left_next {
            return Err(KernelError::dimension_mismatch(
                "validate_tt_cores",
                vec![r_right],
                vec![r_left_next],
                format!("Rank mismatch between cores {} and {}", i, i + 1),
            ));
        }
    }

    Ok(())
}

/// Contract a TT chain into the full tensor.
///
/// Keeps an accumulator of shape (n₁ · ... · n_k, r_k) and multiplies it by
/// the next core reshaped to (r_k, n_{k+1} · r_{k+1}). The result has shape
/// (n₁, ..., n_d).
///
/// # Errors
///
/// Returns the errors of [`validate_tt_cores`].
///
/// # Complexity
///
/// Time: O(∏ᵢ nᵢ × r²) where r is the max TT-rank
pub fn tt_contract<T>(cores: &[ArrayView3<T>]) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    validate_tt_cores(cores)?;

    let mode_sizes: Vec<usize> = cores.iter().map(|c| c.shape()[1]).collect();
    tracing::trace!(cores = cores.len(), shape = ?mode_sizes, "tt_contract");

    // (n₁, r₁) from the first core
    let mut acc: Array2<T> = cores[0].index_axis(Axis(0), 0).to_owned();

    for core in &cores[1..] {
        let (r_left, n, r_right) = (core.shape()[0], core.shape()[1], core.shape()[2]);

        let core_2d = core
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order((r_left, n * r_right))
            .map_err(|e| reshape_error(&[r_left, n, r_right], e))?;

        let rows = acc.nrows();
        acc = matmul(&acc.view(), &core_2d.view())
            .into_shape_with_order((rows * n, r_right))
            .map_err(|e| reshape_error(&[rows, n, r_right], e))?;
    }

    acc.into_shape_with_order(IxDyn(&mode_sizes))
        .map_err(|e| reshape_error(&mode_sizes, e))
}

fn reshape_error(shape: &[usize], err: impl std::fmt::Display) -> KernelError {
    KernelError::dimension_mismatch("tt_contract", shape.to_vec(), vec![], err.to_string())
}

/// Compute the Frobenius norm of a TT tensor without reconstruction.
///
/// Propagates the Gram matrix `V_k = ∑_{i_k} G_k(i_k)ᵀ V_{k-1} G_k(i_k)`
/// from `V_0 = [1]`; the squared norm is the final 1 × 1 matrix.
///
/// # Errors
///
/// Returns the errors of [`validate_tt_cores`].
pub fn tt_norm<T>(cores: &[ArrayView3<T>]) -> KernelResult<T>
where
    T: Float,
{
    validate_tt_cores(cores)?;

    // Boundary condition
    let mut v = Array2::<T>::eye(1);

    for core in cores.iter() {
        v = contract_core_with_v(&v, core);
    }

    // ||X||² is non-negative up to rounding
    Ok(v[[0, 0]].max(T::zero()).sqrt())
}

/// Contract a TT core with the running Gram matrix.
///
/// For a core G of shape (r_left, n, r_right) and matrix V of shape (r_left, r_left),
/// computes W of shape (r_right, r_right) where:
/// W[i,j] = sum_{alpha,beta,k} V[alpha,beta] * G[alpha,k,i] * G[beta,k,j]
fn contract_core_with_v<T>(v: &Array2<T>, core: &ArrayView3<T>) -> Array2<T>
where
    T: Float,
{
    let (r_left, n, r_right) = (core.shape()[0], core.shape()[1], core.shape()[2]);

    let mut w = Array2::<T>::zeros((r_right, r_right));

    for i in 0..r_right {
        for j in 0..r_right {
            let mut sum = T::zero();
            for alpha in 0..r_left {
                for beta in 0..r_left {
                    let v_val = v[[alpha, beta]];
                    for k in 0..n {
                        sum = sum + v_val * core[[alpha, k, i]] * core[[beta, k, j]];
                    }
                }
            }
            w[[i, j]] = sum;
        }
    }

    w
}
