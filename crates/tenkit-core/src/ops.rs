//! Array-level matricization and the mode-n product.
//!
//! These functions work on plain `scirs2_core` array views and carry no
//! tensor metadata. [`DenseND`](crate::dense::DenseND) builds its stateful
//! unfold/fold and mode-n product on top of them, and `tenkit-kernels`
//! reuses them for the view-based multilinear kernels.
//!
//! # Column ordering
//!
//! Unfolding along a group of row modes places the row modes first (in the
//! order given) and the remaining modes after them in their original order,
//! then reads the permuted tensor in row-major order. For a single mode `n`
//! this means the columns of `X₍ₙ₎` enumerate the remaining modes
//! lexicographically with the last remaining mode varying fastest.
//!
//! ```
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//! use tenkit_core::ops::unfold_view;
//!
//! let tensor = Array::from_shape_vec(IxDyn(&[2, 3, 4]), (0..24).map(|x| x as f64).collect())
//!     .unwrap();
//!
//! let x2 = unfold_view(&tensor.view(), &[2]).unwrap();
//! assert_eq!(x2.shape(), &[4, 6]);
//! assert_eq!(x2.row(0).to_vec(), vec![0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
//! ```
//!
//! # Mathematical Background
//!
//! For a tensor **X** ∈ ℝ^(I₁ × ... × Iₙ) the mode-n product with a matrix
//! **M** ∈ ℝ^(J × Iₙ) is defined through the unfolding: **Y₍ₙ₎ = M · X₍ₙ₎**.
//! Products along distinct modes commute, and two products along the same
//! mode fuse: `(X ×ₙ A) ×ₙ B = X ×ₙ (B · A)`.

use crate::error::{TensorError, TensorResult};
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView, ArrayView2, IxDyn};
use scirs2_core::numeric::Num;

/// Check that `row_modes` names distinct modes of a tensor of the given order.
pub fn validate_modes(row_modes: &[usize], order: usize) -> TensorResult<()> {
    let mut seen = vec![false; order];
    for &mode in row_modes {
        if mode >= order {
            return Err(TensorError::invalid_mode(
                mode,
                order,
                "Mode index is out of range",
            ));
        }
        if seen[mode] {
            return Err(TensorError::invalid_mode(
                mode,
                order,
                "Mode appears more than once in the unfolding group",
            ));
        }
        seen[mode] = true;
    }
    Ok(())
}

/// The modes not listed in `row_modes`, in their original order.
pub fn column_modes(row_modes: &[usize], order: usize) -> Vec<usize> {
    (0..order).filter(|m| !row_modes.contains(m)).collect()
}

/// Axis permutation that brings the row modes to the front.
fn unfolding_permutation(row_modes: &[usize], order: usize) -> Vec<usize> {
    let mut perm = row_modes.to_vec();
    perm.extend(column_modes(row_modes, order));
    perm
}

/// Unfold a tensor view into a matrix whose rows enumerate `row_modes`.
///
/// # Errors
///
/// Returns [`TensorError::InvalidMode`] if a row mode is out of range or
/// repeated.
///
/// # Complexity
///
/// Time: O(size) for the permuted copy.
pub fn unfold_view<T>(tensor: &ArrayView<T, IxDyn>, row_modes: &[usize]) -> TensorResult<Array2<T>>
where
    T: Clone,
{
    let shape = tensor.shape();
    validate_modes(row_modes, shape.len())?;

    let perm = unfolding_permutation(row_modes, shape.len());
    let rows: usize = row_modes.iter().map(|&m| shape[m]).product();
    let cols: usize = perm[row_modes.len()..].iter().map(|&m| shape[m]).product();

    let permuted = tensor.clone().permuted_axes(IxDyn(&perm));
    let contiguous = permuted.as_standard_layout().into_owned();

    contiguous
        .into_shape_with_order((rows, cols))
        .map_err(|e| TensorError::InvalidShape(e.to_string()))
}

/// Fold an unfolded array back into a tensor of the given shape.
///
/// This is the exact inverse of [`unfold_view`] for the same `shape` and
/// `row_modes`. The unfolded input may be a matrix or a flat vector; only its
/// row-major element sequence is used.
///
/// # Errors
///
/// Returns [`TensorError::InvalidMode`] for a bad group and
/// [`TensorError::ShapeMismatch`] if the element count or matrix shape does
/// not fit `shape`.
pub fn fold_view<T>(
    unfolded: &ArrayView<T, IxDyn>,
    shape: &[usize],
    row_modes: &[usize],
) -> TensorResult<Array<T, IxDyn>>
where
    T: Clone,
{
    validate_modes(row_modes, shape.len())?;

    let perm = unfolding_permutation(row_modes, shape.len());
    let rows: usize = row_modes.iter().map(|&m| shape[m]).product();
    let cols: usize = perm[row_modes.len()..].iter().map(|&m| shape[m]).product();

    let compatible = match unfolded.ndim() {
        2 => unfolded.shape() == [rows, cols],
        _ => unfolded.len() == rows * cols,
    };
    if !compatible {
        return Err(TensorError::ShapeMismatch(format!(
            "Unfolded array of shape {:?} cannot fold into {:?} along modes {:?}",
            unfolded.shape(),
            shape,
            row_modes
        )));
    }

    let inter_shape: Vec<usize> = perm.iter().map(|&m| shape[m]).collect();
    let inter = Array::from_shape_vec(IxDyn(&inter_shape), unfolded.iter().cloned().collect())
        .map_err(|e| TensorError::InvalidShape(e.to_string()))?;

    let mut inverse_perm = vec![0; perm.len()];
    for (position, &mode) in perm.iter().enumerate() {
        inverse_perm[mode] = position;
    }

    Ok(inter
        .permuted_axes(IxDyn(&inverse_perm))
        .as_standard_layout()
        .into_owned())
}

/// Plain matrix product `a · b`.
///
/// # Panics
///
/// Panics if the inner dimensions disagree.
pub fn matmul<T>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> Array2<T>
where
    T: Clone + Num,
{
    let (rows, inner) = (a.nrows(), a.ncols());
    assert_eq!(
        inner,
        b.nrows(),
        "Inner dimensions must match: {} vs {}",
        inner,
        b.nrows()
    );
    let cols = b.ncols();

    let mut result = Array2::<T>::zeros((rows, cols));
    for i in 0..rows {
        for j in 0..cols {
            let mut sum = T::zero();
            for k in 0..inner {
                sum = sum + a[[i, k]].clone() * b[[k, j]].clone();
            }
            result[[i, j]] = sum;
        }
    }
    result
}

/// Compute the mode-n product `tensor ×ₙ matrix`.
///
/// Unfolds along `mode`, left-multiplies by `matrix`, and folds back with
/// the mode size replaced by `matrix.nrows()`.
///
/// # Errors
///
/// - [`TensorError::InvalidMode`] if `mode >= tensor.ndim()`
/// - [`TensorError::DimensionMismatch`] if `matrix.ncols() != tensor.shape()[mode]`
///
/// # Complexity
///
/// Time: O(J × size) for a J-row matrix.
pub fn mode_product<T>(
    tensor: &ArrayView<T, IxDyn>,
    matrix: &ArrayView2<T>,
    mode: usize,
) -> TensorResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    check_mode_product(tensor.shape(), matrix, mode)?;

    let unfolded = unfold_view(tensor, &[mode])?;
    let product = matmul(matrix, &unfolded.view());

    let mut new_shape = tensor.shape().to_vec();
    new_shape[mode] = matrix.nrows();

    fold_view(&product.view().into_dyn(), &new_shape, &[mode])
}

/// Validate the operands of a mode-n product without computing it.
pub fn check_mode_product<T>(shape: &[usize], matrix: &ArrayView2<T>, mode: usize) -> TensorResult<()> {
    if mode >= shape.len() {
        return Err(TensorError::invalid_mode(
            mode,
            shape.len(),
            "mode_n_product target mode is out of range",
        ));
    }
    if matrix.ncols() != shape[mode] {
        return Err(TensorError::dimension_mismatch(
            format!("mode_n_product (mode {})", mode),
            shape[mode],
            matrix.ncols(),
        ));
    }
    Ok(())
}
