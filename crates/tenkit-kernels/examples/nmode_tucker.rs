//! Example demonstrating n-mode products and the Tucker operator
//!
//! N-mode products are the building block of Tucker reconstruction: a small
//! core is expanded by one factor matrix per mode.
//!
//! Run with: cargo run --example nmode_tucker

use anyhow::Result;
use scirs2_core::ndarray_ext::{Array, Array2};
use tenkit_core::DenseND;
use tenkit_kernels::{nmode_product, nmode_products_seq, tucker_operator};

fn main() -> Result<()> {
    println!("=== N-Mode Product and Tucker Operator Example ===\n");

    // Example 1: Basic n-mode product
    println!("1. Basic N-Mode Product (Tensor-Matrix Multiplication)");
    println!("-------------------------------------------------------");

    let tensor = DenseND::<f64>::from_array(Array::from_shape_fn(vec![2, 3, 4], |idx| {
        (idx[0] * 12 + idx[1] * 4 + idx[2]) as f64 + 1.0
    }));
    println!("Original tensor shape: {:?}", tensor.shape());

    let matrix = Array2::<f64>::from_shape_fn((5, 3), |(i, j)| (i + j) as f64 + 1.0);
    let result = nmode_product(&tensor.view(), &matrix.view(), 1)?;
    println!(
        "Mode-1 product with a {}x{} matrix: {:?} -> {:?}\n",
        matrix.nrows(),
        matrix.ncols(),
        tensor.shape(),
        result.shape()
    );

    // Example 2: Sequential products
    println!("2. Sequential N-Mode Products");
    println!("-----------------------------");

    let m0 = Array2::<f64>::from_shape_fn((3, 2), |(i, j)| if i == j { 1.0 } else { 0.5 });
    let m2 = Array2::<f64>::from_shape_fn((2, 4), |(i, j)| (i * 4 + j) as f64 / 8.0);
    let seq = nmode_products_seq(&tensor.view(), &[(&m0.view(), 0), (&m2.view(), 2)])?;
    println!("After modes 0 and 2: {:?}\n", seq.shape());

    // Example 3: Tucker reconstruction from a small core
    println!("3. Tucker Operator");
    println!("------------------");

    let core = Array::from_shape_fn(vec![2, 2, 2], |idx| (idx[0] + idx[1] + idx[2]) as f64);
    let factors = [
        Array2::<f64>::from_shape_fn((10, 2), |(i, j)| ((i + 1) * (j + 1)) as f64 / 10.0),
        Array2::<f64>::from_shape_fn((12, 2), |(i, j)| (i as f64 - j as f64) / 12.0),
        Array2::<f64>::from_shape_fn((8, 2), |(i, j)| ((i + j) % 3) as f64),
    ];
    let views: Vec<_> = factors.iter().map(|f| f.view()).collect();

    let full = tucker_operator(&core.view(), &views)?;
    let full = DenseND::from_array(full);

    let stored = core.len() + factors.iter().map(|f| f.len()).sum::<usize>();
    println!("Core {:?} -> full {:?}", core.shape(), full.shape());
    println!(
        "Stored values: {} vs {} ({:.1}x compression)",
        stored,
        full.size(),
        full.size() as f64 / stored as f64
    );
    println!("Frobenius norm of the reconstruction: {:.4}", full.frob_norm());

    Ok(())
}
