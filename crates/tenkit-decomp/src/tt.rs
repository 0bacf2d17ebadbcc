//! Tensor Train (TT) representation
//!
//! Represents an N-way tensor as a chain of 3-way cores:
//!
//! X(i₁, ..., iₙ) = G₁[:, i₁, :] · G₂[:, i₂, :] · ... · Gₙ[:, iₙ, :]
//!
//! Gₖ has shape (rₖ₋₁, Iₖ, rₖ) with r₀ = rₙ = 1.

use crate::utils::{compression_ratio, labelled, rename_modes};
use scirs2_core::ndarray_ext::{Array3, ArrayView3};
use scirs2_core::numeric::{Float, Num};
use std::fmt;
use tenkit_core::tracing_support::record_reconstruction;
use tenkit_core::{default_mode_names, DenseND, Mode, TensorError};
use tenkit_kernels::{tt_contract, tt_norm, validate_tt_cores, KernelError};
use thiserror::Error;

/// Errors from building or using a TT representation
#[derive(Error, Debug)]
pub enum TTError {
    /// Core chain is empty or its ranks do not line up
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Mode renaming or labelling failed
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// Contraction or norm kernel failed
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// TT representation
#[derive(Debug, Clone, PartialEq)]
pub struct TTDecomp<T> {
    /// TT cores, core k has shape (r_{k-1}, I_k, r_k)
    cores: Vec<Array3<T>>,

    mode_names: Vec<String>,
}

impl<T> TTDecomp<T>
where
    T: Clone + Num,
{
    /// Create a TT representation from its cores.
    ///
    /// # Errors
    ///
    /// Returns [`TTError::ShapeMismatch`] if there are no cores, the
    /// boundary ranks are not 1, or adjacent ranks disagree.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array3;
    /// use tenkit_decomp::TTDecomp;
    ///
    /// let tt = TTDecomp::new(vec![
    ///     Array3::<f64>::ones((1, 4, 2)),
    ///     Array3::ones((2, 5, 3)),
    ///     Array3::ones((3, 6, 1)),
    /// ]).unwrap();
    ///
    /// assert_eq!(tt.rank(), vec![2, 3]);
    /// assert_eq!(tt.shape(), vec![4, 5, 6]);
    /// ```
    pub fn new(cores: Vec<Array3<T>>) -> Result<Self, TTError> {
        let views: Vec<ArrayView3<T>> = cores.iter().map(|c| c.view()).collect();
        validate_tt_cores(&views).map_err(|e| TTError::ShapeMismatch(e.to_string()))?;

        tracing::trace!(order = cores.len(), "tt::new");

        let mode_names = default_mode_names(cores.len());
        Ok(Self { cores, mode_names })
    }

    /// Internal TT ranks (r₁, ..., rₙ₋₁); empty for a single core
    pub fn rank(&self) -> Vec<usize> {
        self.cores[1..].iter().map(|c| c.shape()[0]).collect()
    }

    /// Number of cores, one per mode
    pub fn order(&self) -> usize {
        self.cores.len()
    }

    /// Shape of the represented tensor, the middle extent of each core
    pub fn shape(&self) -> Vec<usize> {
        self.cores.iter().map(|c| c.shape()[1]).collect()
    }

    /// Number of elements of the represented tensor
    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// All cores in chain order
    pub fn cores(&self) -> &[Array3<T>] {
        &self.cores
    }

    /// Core `k`, or `None` past the end of the chain
    pub fn core(&self, k: usize) -> Option<&Array3<T>> {
        self.cores.get(k)
    }

    /// Total number of core entries
    pub fn num_parameters(&self) -> usize {
        self.cores.iter().map(|c| c.len()).sum()
    }

    /// Elements of the full tensor per stored parameter
    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(&self.shape(), self.num_parameters())
    }

    /// Labels of the represented tensor's modes
    pub fn mode_names(&self) -> &[String] {
        &self.mode_names
    }

    /// Rename some modes; nothing changes if any index is out of range
    pub fn set_mode_names<I, S>(&mut self, names: I) -> Result<&mut Self, TTError>
    where
        I: IntoIterator<Item = (Mode, S)>,
        S: Into<String>,
    {
        rename_modes(&mut self.mode_names, names)?;
        Ok(self)
    }

    /// Restore the `mode-k` labels
    pub fn reset_mode_names(&mut self) -> &mut Self {
        self.mode_names = default_mode_names(self.order());
        self
    }

    /// Reconstruct the full tensor by contracting the chain left to right.
    pub fn reconstruct(&self) -> Result<DenseND<T>, TTError> {
        let views: Vec<ArrayView3<T>> = self.cores.iter().map(|c| c.view()).collect();
        let full = tt_contract(&views)?;

        record_reconstruction("tt", full.shape(), self.num_parameters());
        Ok(labelled(full, &self.mode_names)?)
    }
}

impl<T> TTDecomp<T>
where
    T: Float,
{
    /// Frobenius norm computed from the cores, without reconstruction
    pub fn frob_norm(&self) -> Result<T, TTError> {
        let views: Vec<ArrayView3<T>> = self.cores.iter().map(|c| c.view()).collect();
        Ok(tt_norm(&views)?)
    }
}

impl<T> TTDecomp<T>
where
    T: Float + fmt::Display,
{
    /// Fixed-format summary of ranks, storage and norm
    pub fn describe(&self) -> Result<String, TTError> {
        Ok(format!(
            "This TT decomposition has ranks {:?} and represents a tensor of order {}.\n\
             Sizes and names of its modes are {:?} and {:?} respectively.\n\
             It stores {} parameters ({:.2}x compression) and its Frobenius norm is {:.4}.",
            self.rank(),
            self.order(),
            self.shape(),
            self.mode_names,
            self.num_parameters(),
            self.compression_ratio(),
            self.frob_norm()?
        ))
    }
}

impl<T> fmt::Display for TTDecomp<T>
where
    T: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.describe().map_err(|_| fmt::Error)?;
        f.write_str(&summary)
    }
}
