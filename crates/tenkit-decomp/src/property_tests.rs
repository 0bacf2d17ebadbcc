//! Property-based tests for the factorized representations
//!
//! Every representation must agree with an independent evaluation of its
//! defining formula.

#[cfg(test)]
mod tests {
    use crate::{CpDecomp, TTDecomp, TuckerDecomp};
    use proptest::prelude::*;
    use scirs2_core::ndarray_ext::{Array1, Array2, Array3};
    use tenkit_core::DenseND;
    use tenkit_kernels::{cp_reconstruct, tucker_operator};

    fn proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 32,
            ..ProptestConfig::default()
        }
    }

    fn small_int(seed: usize) -> f64 {
        ((seed * 7 + 3) % 9) as f64 - 4.0
    }

    // Property: CP via the diagonal core equals the sum of outer products
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn cp_core_route_matches_outer_products(
            rows in prop::collection::vec(1usize..4, 1..4),
            rank in 1usize..4,
        ) {
            let factors: Vec<Array2<f64>> = rows
                .iter()
                .enumerate()
                .map(|(k, &n)| Array2::from_shape_fn((n, rank), |(i, r)| small_int(i + 3 * r + k)))
                .collect();
            let weights = Array1::from_shape_fn(rank, |r| small_int(r + 11));

            let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
            let expected = cp_reconstruct(&views, &weights.view()).unwrap();

            let cp = CpDecomp::new(factors, weights).unwrap();
            let full = cp.reconstruct().unwrap();

            prop_assert_eq!(full.shape(), rows.as_slice());
            prop_assert!(full.approx_eq(&DenseND::from_array(expected), 1e-9));
        }
    }

    // Property: Tucker reconstruction matches the size-ordered Tucker operator
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn tucker_matches_operator(
            ranks in prop::collection::vec(1usize..4, 1..4),
            rows in prop::collection::vec(1usize..5, 3),
        ) {
            let size: usize = ranks.iter().product();
            let core = DenseND::from_vec((0..size).map(small_int).collect(), &ranks).unwrap();
            let factors: Vec<Array2<f64>> = ranks
                .iter()
                .enumerate()
                .map(|(k, &r)| Array2::from_shape_fn((rows[k], r), |(i, j)| small_int(i * 5 + j + k)))
                .collect();

            let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
            let expected = tucker_operator(&core.view(), &views).unwrap();

            let tucker = TuckerDecomp::new(core, factors).unwrap();
            let full = tucker.reconstruct().unwrap();

            prop_assert_eq!(full.shape(), expected.shape());
            prop_assert!(full.approx_eq(&DenseND::from_array(expected), 1e-9));
        }
    }

    // Property: TT chain norm equals the norm of its reconstruction
    proptest! {
        #![proptest_config(proptest_config())]
        #[test]
        fn tt_norm_matches_reconstruction(
            dims in prop::collection::vec(1usize..4, 1..5),
            rank in 1usize..4,
        ) {
            let d = dims.len();
            let cores: Vec<Array3<f64>> = dims
                .iter()
                .enumerate()
                .map(|(k, &n)| {
                    let r_left = if k == 0 { 1 } else { rank };
                    let r_right = if k + 1 == d { 1 } else { rank };
                    Array3::from_shape_fn((r_left, n, r_right), |(a, i, b)| small_int(a + 2 * i + 3 * b + k))
                })
                .collect();

            let tt = TTDecomp::new(cores).unwrap();
            prop_assert_eq!(tt.rank(), vec![rank; d - 1]);

            let full = tt.reconstruct().unwrap();
            prop_assert_eq!(full.shape(), dims.as_slice());

            let direct = full.frob_norm();
            let chain = tt.frob_norm().unwrap();
            prop_assert!((direct - chain).abs() <= 1e-9 * direct.max(1.0));
        }
    }
}
