//! Integration tests for tenkit-kernels with tenkit-core
//!
//! These tests verify that kernel operations agree with the tensor-level
//! operations of `DenseND`.

use scirs2_core::ndarray_ext::{array, Array2, Array3};
use tenkit_core::DenseND;
use tenkit_kernels::{
    cp_reconstruct, nmode_product, nmode_products_seq, outer_product, tt_contract, tt_norm,
    tucker_operator, validate_tt_cores, KernelError,
};

fn fixture() -> DenseND<f64> {
    DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap()
}

#[test]
fn test_nmode_product_matches_densend() {
    let tensor = fixture();
    let matrix = Array2::from_shape_fn((5, 3), |(i, j)| (i * 3 + j) as f64);

    let kernel = nmode_product(&tensor.view(), &matrix.view(), 1).unwrap();
    let dense = tensor.mode_n_product(&matrix.view(), 1).unwrap();

    assert_eq!(kernel.shape(), &[2, 5, 4]);
    assert_eq!(&kernel, dense.as_array());
}

#[test]
fn test_nmode_product_errors_convert() {
    let tensor = fixture();

    let wrong_cols = Array2::<f64>::ones((2, 7));
    match nmode_product(&tensor.view(), &wrong_cols.view(), 2) {
        Err(KernelError::DimensionMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, vec![4]);
            assert_eq!(actual, vec![7]);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }

    let square = Array2::<f64>::eye(2);
    assert!(matches!(
        nmode_product(&tensor.view(), &square.view(), 3),
        Err(KernelError::InvalidMode {
            mode: 3,
            max_mode: 3,
            ..
        })
    ));
}

#[test]
fn test_sequential_products_on_densend() {
    let tensor = fixture();
    let shrink = array![[1.0, 1.0]];
    let pick = array![[0.0, 0.0, 0.0, 1.0]];

    let result =
        nmode_products_seq(&tensor.view(), &[(&shrink.view(), 0), (&pick.view(), 2)]).unwrap();
    assert_eq!(result.shape(), &[1, 3, 1]);
    // x[0, j, 3] + x[1, j, 3] = (4j + 3) + (12 + 4j + 3)
    assert_eq!(result[[0, 0, 0]], 18.0);
    assert_eq!(result[[0, 2, 0]], 34.0);
}

#[test]
fn test_tucker_operator_with_identity_factors() {
    let tensor = fixture();
    let factors: Vec<Array2<f64>> = tensor.shape().iter().map(|&n| Array2::eye(n)).collect();
    let views: Vec<_> = factors.iter().map(|f| f.view()).collect();

    let result = tucker_operator(&tensor.view(), &views).unwrap();
    assert_eq!(&result, tensor.as_array());

    assert!(tucker_operator(&tensor.view(), &views[..2]).is_err());
}

#[test]
fn test_rank_one_cp_is_outer_product() {
    let a = array![1.0, 2.0];
    let b = array![3.0, 4.0, 5.0];

    let outer = outer_product(&[a.view(), b.view()]).unwrap();

    let fa = a.clone().insert_axis(scirs2_core::ndarray_ext::Axis(1));
    let fb = b.clone().insert_axis(scirs2_core::ndarray_ext::Axis(1));
    let weights = array![1.0];
    let cp = cp_reconstruct(&[fa.view(), fb.view()], &weights.view()).unwrap();

    assert_eq!(outer, cp);
    assert_eq!(cp[[1, 2]], 10.0);
}

#[test]
fn test_tt_roundtrip_of_rank_one_tensor() {
    // Rank-1 TT of u ⊗ v ⊗ w
    let u = array![1.0_f64, 2.0];
    let v = array![1.0, -1.0, 3.0];
    let w = array![0.5, 2.0];

    let g1 = Array3::from_shape_fn((1, 2, 1), |(_, i, _)| u[i]);
    let g2 = Array3::from_shape_fn((1, 3, 1), |(_, i, _)| v[i]);
    let g3 = Array3::from_shape_fn((1, 2, 1), |(_, i, _)| w[i]);
    let cores = [g1.view(), g2.view(), g3.view()];

    validate_tt_cores(&cores).unwrap();
    let full = tt_contract(&cores).unwrap();
    let expected = outer_product(&[u.view(), v.view(), w.view()]).unwrap();
    assert_eq!(full, expected);

    let norm = tt_norm(&cores).unwrap();
    let direct = DenseND::from_array(full).frob_norm();
    assert!((norm - direct).abs() < 1e-12);
}
