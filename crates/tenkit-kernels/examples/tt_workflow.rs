//! Tensor Train workflow: validate a chain of cores, contract it, and
//! compare the chain norm with the norm of the full tensor.
//!
//! Run with: cargo run --example tt_workflow

use anyhow::Result;
use scirs2_core::ndarray_ext::Array3;
use tenkit_core::DenseND;
use tenkit_kernels::{tt_contract, tt_norm, validate_tt_cores};

fn main() -> Result<()> {
    println!("=== Tensor Train Workflow ===\n");

    let dims = [4, 5, 6, 3];
    let ranks = [1, 3, 4, 2, 1];

    let cores: Vec<Array3<f64>> = dims
        .iter()
        .enumerate()
        .map(|(k, &n)| {
            Array3::from_shape_fn((ranks[k], n, ranks[k + 1]), |(a, i, b)| {
                ((a + 1) as f64 * 0.3 + (i as f64) * 0.1 - (b as f64) * 0.2).sin()
            })
        })
        .collect();
    let views: Vec<_> = cores.iter().map(|c| c.view()).collect();

    for (k, core) in cores.iter().enumerate() {
        println!("Core {}: {:?}", k, core.shape());
    }
    validate_tt_cores(&views)?;

    let chain_norm = tt_norm(&views)?;
    let full = DenseND::from_array(tt_contract(&views)?);

    let stored: usize = cores.iter().map(|c| c.len()).sum();
    println!("\nFull tensor: {:?} ({} values)", full.shape(), full.size());
    println!("TT storage:  {} values", stored);
    println!("\nNorm from cores: {:.6}", chain_norm);
    println!("Norm from full:  {:.6}", full.frob_norm());

    // A broken chain is rejected before any contraction
    let broken = Array3::<f64>::zeros((2, 4, 3));
    if let Err(err) = validate_tt_cores(&[broken.view(), views[1].clone()]) {
        println!("\nRejected chain: {}", err);
    }

    Ok(())
}
