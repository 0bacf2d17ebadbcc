//! Property-based tests for tensor kernel operations
//!
//! These tests verify mathematical properties that should hold for all valid inputs

use super::*;
use proptest::prelude::*;
use scirs2_core::ndarray_ext::{Array, Array1, Array2, Array3, IxDyn};

/// Strategy to generate a small 3-way shape
fn small_shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 3)
}

fn filled(shape: &[usize], seed: u64) -> Array<f64, IxDyn> {
    let size: usize = shape.iter().product();
    let data = (0..size)
        .map(|i| (((i as u64 + 1) * (seed + 7)) % 13) as f64 - 6.0)
        .collect();
    Array::from_shape_vec(IxDyn(shape), data).unwrap()
}

proptest! {
    /// N-mode product replaces exactly one dimension
    #[test]
    fn test_nmode_product_dimensions(shape in small_shape(), mode in 0usize..3, rows in 1usize..6) {
        let tensor = filled(&shape, 1);
        let matrix = Array2::<f64>::ones((rows, shape[mode]));

        let result = nmode_product(&tensor.view(), &matrix.view(), mode).unwrap();

        let mut expected = shape.clone();
        expected[mode] = rows;
        prop_assert_eq!(result.shape(), expected.as_slice());
    }

    /// Identity matrix leaves the tensor unchanged
    #[test]
    fn test_nmode_product_identity(shape in small_shape(), mode in 0usize..3) {
        let tensor = filled(&shape, 3);
        let identity = Array2::<f64>::eye(shape[mode]);

        let result = nmode_product(&tensor.view(), &identity.view(), mode).unwrap();
        prop_assert_eq!(result, tensor);
    }

    /// Products along distinct modes commute
    #[test]
    fn test_nmode_products_commute(shape in small_shape(), rows_a in 1usize..4, rows_b in 1usize..4) {
        let tensor = filled(&shape, 5);
        let a = Array2::from_shape_fn((rows_a, shape[0]), |(i, j)| (i + 2 * j) as f64);
        let b = Array2::from_shape_fn((rows_b, shape[2]), |(i, j)| (i as f64) - (j as f64));

        let ab = nmode_products_seq(&tensor.view(), &[(&a.view(), 0), (&b.view(), 2)]).unwrap();
        let ba = nmode_products_seq(&tensor.view(), &[(&b.view(), 2), (&a.view(), 0)]).unwrap();
        prop_assert_eq!(ab, ba);
    }

    /// Tucker operator agrees with a fixed-order sequence of products
    #[test]
    fn test_tucker_operator_matches_sequence(shape in small_shape(), rows in prop::collection::vec(1usize..5, 3)) {
        let core = filled(&shape, 11);
        let factors: Vec<Array2<f64>> = (0..3)
            .map(|k| Array2::from_shape_fn((rows[k], shape[k]), |(i, j)| ((i * 3 + j + k) % 4) as f64))
            .collect();
        let views: Vec<_> = factors.iter().map(|f| f.view()).collect();

        let fast = tucker_operator(&core.view(), &views).unwrap();
        let slow = nmode_products_seq(
            &core.view(),
            &[(&views[0], 0), (&views[1], 1), (&views[2], 2)],
        ).unwrap();
        prop_assert_eq!(fast, slow);
    }

    /// Outer product of vectors has one dimension per vector
    #[test]
    fn test_outer_product_shape(lens in prop::collection::vec(1usize..6, 1..4)) {
        let vectors: Vec<Array1<f64>> = lens.iter().map(|&n| Array1::ones(n)).collect();
        let views: Vec<_> = vectors.iter().map(|v| v.view()).collect();

        let result = outer_product(&views).unwrap();
        prop_assert_eq!(result.shape(), lens.as_slice());
        prop_assert!(result.iter().all(|&x| x == 1.0));
    }

    /// A rank-R CP sum equals the sum of its weighted outer products
    #[test]
    fn test_cp_reconstruct_is_sum_of_terms(rank in 1usize..4, rows in prop::collection::vec(1usize..4, 2..4)) {
        let factors: Vec<Array2<f64>> = rows
            .iter()
            .enumerate()
            .map(|(k, &n)| Array2::from_shape_fn((n, rank), |(i, r)| (i + r + k) as f64 - 1.0))
            .collect();
        let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
        let weights = Array1::from_shape_fn(rank, |r| r as f64 + 0.5);

        let full = cp_reconstruct(&views, &weights.view()).unwrap();

        let mut expected = Array::<f64, IxDyn>::zeros(IxDyn(&rows));
        for r in 0..rank {
            let columns: Vec<_> = factors.iter().map(|f| f.column(r)).collect();
            expected = expected + outer_product_weighted(&columns, weights[r]).unwrap();
        }
        prop_assert_eq!(full, expected);
    }

    /// TT norm equals the norm of the contracted tensor
    #[test]
    fn test_tt_norm_matches_contraction(dims in prop::collection::vec(1usize..4, 1..4), rank in 1usize..3) {
        let d = dims.len();
        let cores: Vec<Array3<f64>> = dims
            .iter()
            .enumerate()
            .map(|(k, &n)| {
                let r_left = if k == 0 { 1 } else { rank };
                let r_right = if k + 1 == d { 1 } else { rank };
                Array3::from_shape_fn((r_left, n, r_right), |(a, i, b)| (a + 2 * i + b + k) as f64 * 0.5 - 1.0)
            })
            .collect();
        let views: Vec<_> = cores.iter().map(|c| c.view()).collect();

        let full = tt_contract(&views).unwrap();
        prop_assert_eq!(full.shape(), dims.as_slice());

        let direct = full.iter().map(|x| x * x).sum::<f64>().sqrt();
        let norm = tt_norm(&views).unwrap();
        prop_assert!((norm - direct).abs() <= 1e-9 * direct.max(1.0));
    }
}
