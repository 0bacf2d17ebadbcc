//! Tensor matricization (unfold/fold) and mode-n product walkthrough.
//!
//! Run with:
//! ```bash
//! cargo run --example unfold_fold
//! ```

use anyhow::Result;
use scirs2_core::ndarray_ext::array;
use tenkit_core::DenseND;

fn main() -> Result<()> {
    println!("=== tenkit-core: Unfold/Fold and Mode-n Products ===\n");

    example_describe()?;
    example_unfold_fold()?;
    example_mode_n_product()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_describe() -> Result<()> {
    println!("--- Example 1: Describing a tensor ---");

    let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
    let tensor = DenseND::from_vec(data, &[2, 3, 4])?.with_mode_names(vec![
        "country", "year", "indicator",
    ])?;

    println!("{}\n", tensor);
    Ok(())
}

fn example_unfold_fold() -> Result<()> {
    println!("--- Example 2: Unfolding along each mode ---");

    let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
    let tensor = DenseND::from_vec(data, &[2, 3, 4])?;

    for mode in 0..tensor.order() {
        let unfolded = tensor.unfold(mode)?;
        println!(
            "Mode {} unfolding: shape {:?}, first row {:?}",
            mode,
            unfolded.shape(),
            &unfolded.to_vec()[..unfolded.shape()[1]]
        );
        let folded = unfolded.fold()?;
        assert_eq!(folded, tensor);
    }

    let mut working = tensor.clone();
    working.unfold_inplace(1)?;
    println!("\nIn place:\n{}", working);
    working.fold_inplace()?;
    println!("Folded back to {:?}\n", working.shape());
    Ok(())
}

fn example_mode_n_product() -> Result<()> {
    println!("--- Example 3: Mode-n product ---");

    let tensor = DenseND::<f64>::ones(&[2, 3, 4]);
    let project = array![[1.0, 0.0, 0.0], [0.0, 1.0, 1.0]];

    let y = tensor.mode_n_product(&project.view(), 1)?;
    println!("X ×₁ M has shape {:?}", y.shape());
    println!("Norm before {:.4}, after {:.4}", tensor.frob_norm(), y.frob_norm());
    Ok(())
}
