//! Tensor Reconstruction Example
//!
//! Builds the same kind of low-rank tensor in CP, Tucker and TT form,
//! reconstructs each one and compares storage against the dense size.
//!
//! Run with:
//! ```bash
//! cargo run --example reconstruction
//! ```

use scirs2_core::ndarray_ext::{Array1, Array2, Array3};
use tenkit_core::tracing_support::{init_tracing, TracingConfig};
use tenkit_decomp::{CpDecomp, TTDecomp, TuckerDecomp};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=tenkit_core=debug shows one event per reconstruction
    init_tracing(TracingConfig::default()).map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", "=".repeat(80));
    println!("Tensor Reconstruction Example");
    println!("{}", "=".repeat(80));
    println!();

    let shape = [20, 24, 16];

    // ========================================================================
    // Example 1: CP
    // ========================================================================
    println!("Example 1: CP reconstruction");
    println!("{}", "-".repeat(80));

    let rank = 3;
    let factors: Vec<Array2<f64>> = shape
        .iter()
        .enumerate()
        .map(|(k, &n)| {
            Array2::from_shape_fn((n, rank), |(i, r)| ((i + 1) as f64 * 0.1 * (r + k + 1) as f64).cos())
        })
        .collect();
    let mut cp = CpDecomp::new(factors, Array1::from(vec![3.0, 2.0, 1.0]))?;
    cp.set_mode_names([(0, "subject"), (1, "channel"), (2, "time")])?;

    let full = cp.reconstruct()?;
    println!("{}", cp);
    println!();
    println!("Dense reconstruction:\n{}", full);
    println!();

    // ========================================================================
    // Example 2: Tucker, reusing the CP factors with the diagonal core
    // ========================================================================
    println!("Example 2: Tucker reconstruction");
    println!("{}", "-".repeat(80));

    let tucker = TuckerDecomp::new(cp.core(), cp.factors().to_vec())?;
    let tucker_full = tucker.reconstruct()?;
    println!("{}", tucker);
    println!(
        "Matches CP reconstruction: {}",
        tucker_full.approx_eq(&full, 1e-10)
    );
    println!();

    // ========================================================================
    // Example 3: Tensor Train
    // ========================================================================
    println!("Example 3: TT reconstruction");
    println!("{}", "-".repeat(80));

    let ranks = [1, 4, 4, 1];
    let cores: Vec<Array3<f64>> = shape
        .iter()
        .enumerate()
        .map(|(k, &n)| {
            Array3::from_shape_fn((ranks[k], n, ranks[k + 1]), |(a, i, b)| {
                ((a + b + 1) as f64 * (i as f64 + 0.5) / n as f64).sin()
            })
        })
        .collect();
    let tt = TTDecomp::new(cores)?;

    let tt_full = tt.reconstruct()?;
    println!("{}", tt);
    println!(
        "Norm from cores {:.6} vs dense {:.6}",
        tt.frob_norm()?,
        tt_full.frob_norm()
    );

    Ok(())
}
