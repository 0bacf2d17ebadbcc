//! Outer product operations for tensor construction
//!
//! For vectors v₁, v₂, ..., vₙ, the outer product creates a tensor where
//! `T[i₁, i₂, ..., iₙ] = v₁[i₁] × v₂[i₂] × ... × vₙ[iₙ]`.
//! A CP representation is a weighted sum of such rank-1 tensors.
//!
//! # SciRS2 Integration
//!
//! All array operations use `scirs2_core::ndarray_ext`.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array, ArrayView1, ArrayView2, IxDyn};
use scirs2_core::numeric::Num;

/// Compute the outer product of multiple vectors to form an N-D tensor
///
/// # Errors
///
/// Returns error if no vectors are provided
///
/// # Complexity
///
/// Time: O(∏ᵢ Iᵢ) where Iᵢ is the length of vector i
/// Space: O(∏ᵢ Iᵢ)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenkit_kernels::outer_product;
///
/// let v1 = array![1.0, 2.0];
/// let v2 = array![3.0, 4.0, 5.0];
/// let v3 = array![6.0, 7.0];
///
/// let tensor = outer_product(&[v1.view(), v2.view(), v3.view()]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3, 2]);
///
/// // T[0,0,0] = 1.0 * 3.0 * 6.0 = 18.0
/// assert_eq!(tensor[[0, 0, 0]], 18.0);
/// ```
pub fn outer_product<T>(vectors: &[ArrayView1<T>]) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    if vectors.is_empty() {
        return Err(KernelError::empty_input("outer_product", "vectors"));
    }

    let shape: Vec<usize> = vectors.iter().map(|v| v.len()).collect();
    let total_size: usize = shape.iter().product();

    let mut data = Vec::with_capacity(total_size);
    for flat_idx in 0..total_size {
        let multi_idx = flat_to_multi_index(flat_idx, &shape);

        let mut prod = T::one();
        for (dim, &idx) in multi_idx.iter().enumerate() {
            prod = prod * vectors[dim][idx].clone();
        }
        data.push(prod);
    }

    Array::from_shape_vec(IxDyn(&shape), data).map_err(|e| {
        KernelError::dimension_mismatch("outer_product", shape.clone(), vec![total_size], e.to_string())
    })
}

/// Compute weighted outer product of multiple vectors
///
/// `T[i₁, ..., iₙ] = λ × v₁[i₁] × ... × vₙ[iₙ]`, one weighted rank-1 term of
/// a CP representation.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenkit_kernels::outer_product_weighted;
///
/// let v1 = array![1.0, 2.0];
/// let v2 = array![3.0, 4.0];
///
/// let tensor = outer_product_weighted(&[v1.view(), v2.view()], 2.0).unwrap();
/// assert_eq!(tensor.shape(), &[2, 2]);
/// assert_eq!(tensor[[0, 0]], 6.0);  // 2.0 * 1.0 * 3.0
/// ```
pub fn outer_product_weighted<T>(vectors: &[ArrayView1<T>], weight: T) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    let mut result = outer_product(vectors)?;
    result.mapv_inplace(|x| x * weight.clone());
    Ok(result)
}

/// Sum of weighted outer products of factor columns
///
/// For factor matrices A₁, ..., Aₙ (each Iₖ × R) and weights λ, computes
/// `T = ∑ᵣ λᵣ × (A₁[:,r] ⊗ A₂[:,r] ⊗ ... ⊗ Aₙ[:,r])`.
///
/// # Errors
///
/// Returns error if:
/// - No factors provided
/// - Factors have different numbers of columns (ranks)
/// - Number of weights doesn't match rank
///
/// # Complexity
///
/// Time: O(R × ∏ᵢ Iᵢ) where R is rank
/// Space: O(∏ᵢ Iᵢ)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenkit_kernels::cp_reconstruct;
///
/// let a1 = array![[1.0, 2.0], [3.0, 4.0]];
/// let a2 = array![[5.0, 6.0], [7.0, 8.0]];
/// let weights = array![2.0, 3.0];
///
/// let tensor = cp_reconstruct(&[a1.view(), a2.view()], &weights.view()).unwrap();
/// // T[0,0] = 2.0*(1*5) + 3.0*(2*6) = 10 + 36 = 46
/// assert_eq!(tensor[[0, 0]], 46.0);
/// ```
pub fn cp_reconstruct<T>(
    factors: &[ArrayView2<T>],
    weights: &ArrayView1<T>,
) -> KernelResult<Array<T, IxDyn>>
where
    T: Clone + Num,
{
    if factors.is_empty() {
        return Err(KernelError::empty_input("cp_reconstruct", "factors"));
    }

    let rank = weights.len();
    for (i, factor) in factors.iter().enumerate() {
        if factor.ncols() != rank {
            return Err(KernelError::dimension_mismatch(
                "cp_reconstruct",
                vec![rank],
                vec![factor.ncols()],
                format!("Factor {} must have one column per weight", i),
            ));
        }
    }

    let shape: Vec<usize> = factors.iter().map(|f| f.nrows()).collect();
    let mut result = Array::<T, IxDyn>::zeros(IxDyn(&shape));

    for r in 0..rank {
        let columns: Vec<ArrayView1<T>> = factors.iter().map(|f| f.column(r)).collect();
        let component = outer_product_weighted(&columns, weights[r].clone())?;
        result = result + component;
    }

    Ok(result)
}

/// Convert flat index to multi-dimensional index (row-major)
fn flat_to_multi_index(mut flat_idx: usize, shape: &[usize]) -> Vec<usize> {
    let mut multi_idx = vec![0; shape.len()];
    for (dim, &size) in shape.iter().enumerate().rev() {
        multi_idx[dim] = flat_idx % size;
        flat_idx /= size;
    }
    multi_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;

    #[test]
    fn test_outer_product_3d() {
        let v1 = array![1.0, 2.0];
        let v2 = array![3.0, 4.0];
        let v3 = array![5.0, 6.0];

        let tensor = outer_product(&[v1.view(), v2.view(), v3.view()]).unwrap();
        assert_eq!(tensor.shape(), &[2, 2, 2]);

        assert_eq!(tensor[[0, 0, 0]], 15.0); // 1*3*5
        assert_eq!(tensor[[0, 0, 1]], 18.0); // 1*3*6
        assert_eq!(tensor[[1, 1, 1]], 48.0); // 2*4*6
    }

    #[test]
    fn test_outer_product_weighted() {
        let v1 = array![1.0, 2.0];
        let v2 = array![3.0, 4.0];

        let tensor = outer_product_weighted(&[v1.view(), v2.view()], 2.0).unwrap();
        assert_eq!(tensor[[0, 1]], 8.0); // 2*1*4
        assert_eq!(tensor[[1, 0]], 12.0); // 2*2*3
        assert_eq!(tensor[[1, 1]], 16.0); // 2*2*4
    }

    #[test]
    fn test_cp_reconstruct_rank2_identity() {
        let a1 = array![[1.0, 0.0], [0.0, 1.0]];
        let a2 = array![[1.0, 0.0], [0.0, 1.0]];
        let w = array![1.0, 1.0];

        let tensor = cp_reconstruct(&[a1.view(), a2.view()], &w.view()).unwrap();
        assert_eq!(tensor.shape(), &[2, 2]);
        assert_eq!(tensor[[0, 0]], 1.0);
        assert_eq!(tensor[[0, 1]], 0.0);
        assert_eq!(tensor[[1, 0]], 0.0);
        assert_eq!(tensor[[1, 1]], 1.0);
    }

    #[test]
    fn test_flat_to_multi_index() {
        let shape = vec![2, 3, 4];

        assert_eq!(flat_to_multi_index(0, &shape), vec![0, 0, 0]);
        assert_eq!(flat_to_multi_index(1, &shape), vec![0, 0, 1]);
        assert_eq!(flat_to_multi_index(4, &shape), vec![0, 1, 0]);
        assert_eq!(flat_to_multi_index(23, &shape), vec![1, 2, 3]);
    }

    #[test]
    fn test_outer_product_empty() {
        let err = outer_product::<f64>(&[]).unwrap_err();
        assert!(err.to_string().contains("empty input"));
    }

    #[test]
    fn test_cp_reconstruct_mismatched_ranks() {
        let a1 = array![[1.0, 2.0], [3.0, 4.0]]; // Rank 2
        let a2 = array![[5.0], [6.0]]; // Rank 1
        let w = array![1.0, 1.0];

        let err = cp_reconstruct(&[a1.view(), a2.view()], &w.view()).unwrap_err();
        assert!(matches!(err, KernelError::DimensionMismatch { .. }));
    }
}
