//! Helpers shared by the factorized representations

use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::Num;
use tenkit_core::{DenseND, Mode, TensorError, TensorResult};

/// Apply `(mode, name)` updates after validating every index.
pub(crate) fn rename_modes<I, S>(names: &mut [String], updates: I) -> TensorResult<()>
where
    I: IntoIterator<Item = (Mode, S)>,
    S: Into<String>,
{
    let order = names.len();
    let updates: Vec<(Mode, String)> = updates
        .into_iter()
        .map(|(mode, name)| (mode, name.into()))
        .collect();

    if let Some(&(mode, _)) = updates.iter().find(|(mode, _)| *mode >= order) {
        return Err(TensorError::invalid_mode(
            mode,
            order,
            "Cannot name a mode the representation does not have",
        ));
    }

    for (mode, name) in updates {
        names[mode] = name;
    }
    Ok(())
}

/// Wrap a reconstructed array and attach the representation's mode names.
pub(crate) fn labelled<T>(array: Array<T, IxDyn>, names: &[String]) -> TensorResult<DenseND<T>>
where
    T: Clone + Num,
{
    DenseND::from_array(array).with_mode_names(names.to_vec())
}

/// Elements of the full tensor per stored parameter.
///
/// A representation storing nothing counts as one parameter, so the ratio is
/// always finite.
pub(crate) fn compression_ratio(shape: &[usize], parameters: usize) -> f64 {
    shape.iter().product::<usize>() as f64 / parameters.max(1) as f64
}
