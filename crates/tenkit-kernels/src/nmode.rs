//! N-mode product implementation (TTM - Tensor Times Matrix)
//!
//! The N-mode product multiplies a tensor by a matrix along a specific mode.
//! For tensor X ∈ ℝ^(I₁×...×Iₙ) and matrix M ∈ ℝ^(J×Iₖ), the result
//! Y = X ×ₖ M has shape (I₁×...×Iₖ₋₁×J×Iₖ₊₁×...×Iₙ).
//!
//! Reconstruction of CP and Tucker representations is a chain of these
//! products, one per mode.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayView2, IxDyn};
use scirs2_core::numeric::Num;
use tenkit_core::ops::mode_product;

/// Compute the N-mode product (tensor times matrix) of a tensor and a matrix
///
/// For tensor X with shape (I₁, I₂, ..., Iₙ) and matrix M with shape (J, Iₖ),
/// computes Y = X ×ₖ M with shape (I₁, ..., Iₖ₋₁, J, Iₖ₊₁, ..., Iₙ).
///
/// # Algorithm
///
/// 1. Unfold tensor X along mode k to get matrix X_(k) of shape (Iₖ, ∏ᵢ≠ₖ Iᵢ)
/// 2. Compute Y_(k) = M · X_(k) with shape (J, ∏ᵢ≠ₖ Iᵢ)
/// 3. Fold Y_(k) back to tensor Y with the new shape
///
/// # Errors
///
/// Returns error if:
/// - Mode is out of bounds
/// - Matrix columns don't match tensor mode size
///
/// # Complexity
///
/// Time: O(J * Iₖ * ∏ᵢ≠ₖ Iᵢ) = O(J * total_elements)
/// Space: O(J * ∏ᵢ≠ₖ Iᵢ)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, array};
/// use tenkit_kernels::nmode_product;
///
/// // 3D tensor: 2×3×4
/// let tensor = Array::from_shape_vec(
///     vec![2, 3, 4],
///     (0..24).map(|x| x as f64).collect()
/// ).unwrap();
///
/// // Matrix: 5×3 (will replace mode-1 dimension)
/// let matrix = array![[1.0, 0.0, 0.0],
///                      [0.0, 1.0, 0.0],
///                      [0.0, 0.0, 1.0],
///                      [1.0, 1.0, 0.0],
///                      [0.0, 1.0, 1.0]];
///
/// let result = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
/// assert_eq!(result.shape(), &[2, 5, 4]);  // 2×5×4
/// ```
pub fn nmode_product<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    Ok(mode_product(tensor, matrix, mode)?)
}

/// Compute multiple N-mode products sequentially
///
/// Applies matrices to a tensor along multiple modes, in the order given.
///
/// # Arguments
///
/// * `tensor` - Input tensor
/// * `matrices` - Slice of (matrix, mode) pairs to apply
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, array};
/// use tenkit_kernels::nmode_products_seq;
///
/// let tensor = Array::from_shape_vec(
///     vec![2, 3, 4],
///     (0..24).map(|x| x as f64).collect()
/// ).unwrap();
///
/// let m1 = array![[1.0, 0.0], [0.0, 1.0]];  // 2×2
/// let m2 = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];  // 2×3
///
/// let result = nmode_products_seq(
///     &tensor.view(),
///     &[(&m1.view(), 0), (&m2.view(), 1)]
/// ).unwrap();
/// assert_eq!(result.shape(), &[2, 2, 4]);
/// ```
pub fn nmode_products_seq<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrices: &[(&ArrayView2<T>, usize)],
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    let mut result = tensor.to_owned();

    for (matrix, mode) in matrices {
        result = nmode_product(&result.view(), matrix, *mode)?;
    }

    Ok(result)
}

/// Apply one matrix per mode, `factors[k]` along mode `k`
///
/// Computes `X ×₁ U₁ ×₂ U₂ ... ×ₙ Uₙ`. Products along distinct modes
/// commute, so the modes are processed in order of increasing growth ratio
/// (`rows / cols`) to keep the intermediates small.
///
/// # Errors
///
/// Returns error if the number of factors differs from the tensor order or a
/// factor's column count does not match its mode.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, array};
/// use tenkit_kernels::tucker_operator;
///
/// // Core tensor: 2×2
/// let core = Array::from_shape_vec(vec![2, 2], vec![1.0, 0.0, 0.0, 2.0]).unwrap();
///
/// let u1 = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];  // 3×2
/// let u2 = array![[1.0, 0.0], [0.0, 1.0]];  // 2×2
///
/// let tensor = tucker_operator(&core.view(), &[u1.view(), u2.view()]).unwrap();
/// assert_eq!(tensor.shape(), &[3, 2]);
/// assert_eq!(tensor[[2, 1]], 2.0);
/// ```
pub fn tucker_operator<T>(
    tensor: &ArrayView<T, IxDyn>,
    factors: &[ArrayView2<T>],
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    let shape = tensor.shape();
    if factors.len() != shape.len() {
        return Err(KernelError::dimension_mismatch(
            "tucker_operator",
            vec![shape.len()],
            vec![factors.len()],
            "Need exactly one factor matrix per mode",
        ));
    }
    for (mode, factor) in factors.iter().enumerate() {
        if factor.ncols() != shape[mode] {
            return Err(KernelError::dimension_mismatch(
                "tucker_operator",
                vec![shape[mode]],
                vec![factor.ncols()],
                format!("Factor {} columns must match mode-{} size", mode, mode),
            ));
        }
    }

    // Heuristic: shrinking products first, growing products last
    let mut modes: Vec<usize> = (0..factors.len()).collect();
    modes.sort_by(|&a, &b| {
        let ratio_a = factors[a].nrows() as f64 / factors[a].ncols().max(1) as f64;
        let ratio_b = factors[b].nrows() as f64 / factors[b].ncols().max(1) as f64;
        ratio_a
            .partial_cmp(&ratio_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::trace!(shape = ?shape, order = ?modes, "tucker_operator");

    let mut result = tensor.to_owned();
    for mode in modes {
        result = nmode_product(&result.view(), &factors[mode], mode)?;
    }

    Ok(result)
}

/// Compute the N-mode product with the rows of `M · X_(k)` computed in
/// parallel
///
/// Produces exactly the same result as [`nmode_product`]; each output row is
/// accumulated in the same order as in the serial kernel.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, Array2};
/// use tenkit_kernels::{nmode_product, nmode_product_parallel};
///
/// let tensor = Array::from_shape_vec(vec![4, 5, 6], (0..120).map(|x| x as f64).collect()).unwrap();
/// let matrix = Array2::from_shape_fn((3, 5), |(i, j)| (i + j) as f64);
///
/// let serial = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
/// let parallel = nmode_product_parallel(&tensor.view(), &matrix.view(), 1).unwrap();
/// assert_eq!(serial, parallel);
/// ```
#[cfg(feature = "parallel")]
pub fn nmode_product_parallel<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num + Send + Sync,
{
    use scirs2_core::ndarray_ext::{Array2, Axis};
    use scirs2_core::parallel_ops::*;
    use tenkit_core::ops::{check_mode_product, fold_view, unfold_view};

    check_mode_product(tensor.shape(), matrix, mode)?;

    let unfolded = unfold_view(tensor, &[mode])?;
    let inner = matrix.ncols();

    let mut product = Array2::<T>::zeros((matrix.nrows(), unfolded.ncols()));

    // Process output rows in parallel
    product
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            for (j, out) in row.iter_mut().enumerate() {
                let mut sum = T::zero();
                for k in 0..inner {
                    sum = sum + matrix[[i, k]].clone() * unfolded[[k, j]].clone();
                }
                *out = sum;
            }
        });

    let mut new_shape = tensor.shape().to_vec();
    new_shape[mode] = matrix.nrows();

    Ok(fold_view(&product.view().into_dyn(), &new_shape, &[mode])?)
}
