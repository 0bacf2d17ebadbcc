//! Property-based tests for tensor operations
//!
//! This module uses proptest to verify the algebraic laws of unfold/fold and
//! the mode-n product across randomly generated shapes and values.

#[cfg(test)]
mod tests {
    use crate::ops::matmul;
    use crate::DenseND;
    use proptest::prelude::*;
    use scirs2_core::ndarray_ext::Array2;

    // Strategy for generating valid tensor shapes (1-4D, small sizes)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..5, 1..=4)
    }

    // A tensor with arbitrary values for a generated shape
    fn tensor_strategy() -> impl Strategy<Value = DenseND<f64>> {
        shape_strategy().prop_flat_map(|shape| {
            let size: usize = shape.iter().product();
            prop::collection::vec(-10.0f64..10.0, size).prop_map(move |data| {
                DenseND::from_vec(data, &shape).unwrap()
            })
        })
    }

    fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Array2<f64>> {
        prop::collection::vec(-2.0f64..2.0, rows * cols)
            .prop_map(move |data| Array2::from_shape_vec((rows, cols), data).unwrap())
    }

    // Tensor, a valid mode, and a matrix compatible with that mode
    fn product_strategy() -> impl Strategy<Value = (DenseND<f64>, usize, Array2<f64>)> {
        tensor_strategy().prop_flat_map(|tensor| {
            let order = tensor.order();
            (Just(tensor), 0..order).prop_flat_map(|(tensor, mode)| {
                let cols = tensor.shape()[mode];
                (
                    Just(tensor),
                    Just(mode),
                    (1usize..4).prop_flat_map(move |rows| matrix_strategy(rows, cols)),
                )
            })
        })
    }

    proptest! {
        #[test]
        fn prop_unfold_fold_roundtrip(tensor in tensor_strategy()) {
            for mode in 0..tensor.order() {
                let unfolded = tensor.unfold(mode).unwrap();
                prop_assert_eq!(unfolded.order(), 2);
                prop_assert_eq!(unfolded.shape()[0], tensor.shape()[mode]);

                let folded = unfolded.fold().unwrap();
                prop_assert_eq!(&folded, &tensor);
            }
        }

        #[test]
        fn prop_unfold_dimensions(tensor in tensor_strategy()) {
            for mode in 0..tensor.order() {
                let unfolded = tensor.unfold(mode).unwrap();
                let mode_size = tensor.shape()[mode];
                prop_assert_eq!(unfolded.shape(), [mode_size, tensor.size() / mode_size]);
            }
        }

        #[test]
        fn prop_group_unfold_roundtrip(tensor in tensor_strategy(), split in 0usize..5) {
            let order = tensor.order();
            let rows: Vec<usize> = (0..order).rev().take(split.min(order)).collect();
            let unfolded = tensor.unfold_group(&rows).unwrap();
            prop_assert_eq!(unfolded.size(), tensor.size());
            prop_assert_eq!(&unfolded.fold().unwrap(), &tensor);
        }

        #[test]
        fn prop_frobenius_norm_invariant(tensor in tensor_strategy()) {
            let norm = tensor.frob_norm();
            prop_assert!(norm >= 0.0);
            for mode in 0..tensor.order() {
                let unfolded_norm = tensor.unfold(mode).unwrap().frob_norm();
                prop_assert!((norm - unfolded_norm).abs() <= 1e-12 * (1.0 + norm));
            }
            prop_assert!((tensor.vectorize().frob_norm() - norm).abs() <= 1e-12 * (1.0 + norm));
        }

        #[test]
        fn prop_mode_product_shape((tensor, mode, matrix) in product_strategy()) {
            let result = tensor.mode_n_product(&matrix.view(), mode).unwrap();
            let mut expected = tensor.shape().to_vec();
            expected[mode] = matrix.nrows();
            prop_assert_eq!(result.shape(), expected.as_slice());
            prop_assert!(result.is_folded());
        }

        #[test]
        fn prop_distinct_mode_products_commute(tensor in tensor_strategy()) {
            prop_assume!(tensor.order() >= 2);
            let a = Array2::from_shape_fn((2, tensor.shape()[0]), |(i, j)| (i + 2 * j) as f64 - 1.0);
            let b = Array2::from_shape_fn((3, tensor.shape()[1]), |(i, j)| (i * j) as f64 + 0.5);

            let ab = tensor
                .mode_n_product(&a.view(), 0).unwrap()
                .mode_n_product(&b.view(), 1).unwrap();
            let ba = tensor
                .mode_n_product(&b.view(), 1).unwrap()
                .mode_n_product(&a.view(), 0).unwrap();
            prop_assert!(ab.approx_eq(&ba, 1e-9));
        }

        #[test]
        fn prop_same_mode_products_fuse((tensor, mode, a) in product_strategy()) {
            let b = Array2::from_shape_fn((2, a.nrows()), |(i, j)| 1.0 + (i + j) as f64);
            let sequential = tensor
                .mode_n_product(&a.view(), mode).unwrap()
                .mode_n_product(&b.view(), mode).unwrap();
            let fused = tensor
                .mode_n_product(&matmul(&b.view(), &a.view()).view(), mode)
                .unwrap();
            prop_assert!(sequential.approx_eq(&fused, 1e-9));
        }

        #[test]
        fn prop_addition_commutative(a in tensor_strategy()) {
            let b = DenseND::from_array(a.as_array().mapv(|x| x * 0.5 - 1.0));
            prop_assert_eq!(&a + &b, &b + &a);
        }
    }
}
