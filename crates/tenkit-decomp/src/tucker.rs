//! Tucker representation
//!
//! The Tucker representation factorizes a tensor X into a core tensor G and
//! one factor matrix per mode:
//!
//! X = G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ
//!
//! Where:
//! - G is the core tensor with shape (R₁, R₂, ..., Rₙ)
//! - Uᵢ are factor matrices with shape (Iᵢ, Rᵢ)
//! - ×ᵢ denotes the i-mode product

use crate::utils::{compression_ratio, labelled, rename_modes};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use scirs2_core::numeric::{Float, Num};
use std::fmt;
use tenkit_core::tracing_support::record_reconstruction;
use tenkit_core::{DenseND, Mode, TensorError};
use thiserror::Error;

/// Errors from building or using a Tucker representation
#[derive(Error, Debug)]
pub enum TuckerError {
    /// Factor count or factor columns disagree with the core
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Folding, mode product or renaming failed
    #[error(transparent)]
    Tensor(#[from] TensorError),
}

/// Tucker representation
///
/// Represents a tensor as G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ
#[derive(Debug, Clone, PartialEq)]
pub struct TuckerDecomp<T> {
    /// Core tensor with shape (R₁, R₂, ..., Rₙ), always folded
    core: DenseND<T>,

    /// Factor matrices, Uᵢ has shape (Iᵢ, Rᵢ)
    factors: Vec<Array2<T>>,

    mode_names: Vec<String>,
}

impl<T> TuckerDecomp<T>
where
    T: Clone + Num,
{
    /// Create a Tucker representation from a core and its factor matrices
    ///
    /// An unfolded core is folded first. The representation starts with the
    /// core's mode names.
    ///
    /// # Errors
    ///
    /// Returns [`TuckerError::ShapeMismatch`] if the number of factors differs
    /// from the core order, or factor `n` does not have `core.shape()[n]`
    /// columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array2;
    /// use tenkit_core::DenseND;
    /// use tenkit_decomp::TuckerDecomp;
    ///
    /// let core = DenseND::<f64>::ones(&[2, 3]);
    /// let tucker = TuckerDecomp::new(
    ///     core,
    ///     vec![Array2::ones((10, 2)), Array2::ones((20, 3))],
    /// ).unwrap();
    ///
    /// assert_eq!(tucker.rank(), vec![2, 3]);
    /// assert_eq!(tucker.shape(), vec![10, 20]);
    /// ```
    pub fn new(mut core: DenseND<T>, factors: Vec<Array2<T>>) -> Result<Self, TuckerError> {
        core.fold_inplace()?;

        if factors.len() != core.order() {
            return Err(TuckerError::ShapeMismatch(format!(
                "Core of order {} needs {} factor matrices, got {}",
                core.order(),
                core.order(),
                factors.len()
            )));
        }

        for (mode, factor) in factors.iter().enumerate() {
            if factor.ncols() != core.shape()[mode] {
                return Err(TuckerError::ShapeMismatch(format!(
                    "Factor {} has {} columns, core mode {} has size {}",
                    mode,
                    factor.ncols(),
                    mode,
                    core.shape()[mode]
                )));
            }
        }

        tracing::trace!(core = ?core.shape(), "tucker::new");

        let mode_names = core.mode_names().to_vec();
        Ok(Self {
            core,
            factors,
            mode_names,
        })
    }

    /// Multilinear rank (R₁, ..., Rₙ), the core shape
    pub fn rank(&self) -> Vec<usize> {
        self.core.shape().to_vec()
    }

    /// Number of modes
    pub fn order(&self) -> usize {
        self.factors.len()
    }

    /// Shape of the represented tensor
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    /// Number of elements of the represented tensor
    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Core tensor G, always folded
    pub fn core(&self) -> &DenseND<T> {
        &self.core
    }

    /// Factor matrices in mode order
    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    /// Core entries plus all factor entries
    pub fn num_parameters(&self) -> usize {
        self.core.size() + self.factors.iter().map(|f| f.len()).sum::<usize>()
    }

    /// Compute compression ratio: original_elements / tucker_elements
    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(&self.shape(), self.num_parameters())
    }

    /// Labels of the represented tensor's modes
    pub fn mode_names(&self) -> &[String] {
        &self.mode_names
    }

    /// Rename some modes; nothing changes if any index is out of range
    pub fn set_mode_names<I, S>(&mut self, names: I) -> Result<&mut Self, TuckerError>
    where
        I: IntoIterator<Item = (Mode, S)>,
        S: Into<String>,
    {
        rename_modes(&mut self.mode_names, names)?;
        Ok(self)
    }

    /// Restore the `mode-k` labels
    pub fn reset_mode_names(&mut self) -> &mut Self {
        self.mode_names = tenkit_core::default_mode_names(self.order());
        self
    }

    /// Reconstruct the full tensor
    ///
    /// Computes X = G ×₁ U₁ ×₂ U₂ ×₃ ... ×ₙ Uₙ in mode order.
    ///
    /// # Complexity
    ///
    /// Time: O(N × ∏ᵢ Rᵢ × Iᵢ)
    /// Space: O(∏ᵢ Iᵢ)
    pub fn reconstruct(&self) -> Result<DenseND<T>, TuckerError> {
        let mut result = self.core.clone();

        for (mode, factor) in self.factors.iter().enumerate() {
            let factor: ArrayView2<T> = factor.view();
            result.mode_n_product_inplace(&factor, mode)?;
        }

        record_reconstruction("tucker", result.shape(), self.num_parameters());
        Ok(labelled(result.into_array(), &self.mode_names)?)
    }
}

impl<T> TuckerDecomp<T>
where
    T: Float,
{
    /// Frobenius norm of the represented tensor, computed from the reconstruction
    pub fn frob_norm(&self) -> Result<T, TuckerError> {
        Ok(self.reconstruct()?.frob_norm())
    }
}

impl<T> TuckerDecomp<T>
where
    T: Float + fmt::Display,
{
    /// Fixed-format summary of core shape, storage and norm
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array2;
    /// use tenkit_core::DenseND;
    /// use tenkit_decomp::TuckerDecomp;
    ///
    /// let tucker = TuckerDecomp::new(
    ///     DenseND::<f64>::ones(&[1, 1]),
    ///     vec![Array2::ones((2, 1)), Array2::ones((3, 1))],
    /// ).unwrap();
    /// let text = tucker.describe().unwrap();
    /// assert!(text.starts_with("This Tucker decomposition has core shape [1, 1]"));
    /// ```
    pub fn describe(&self) -> Result<String, TuckerError> {
        Ok(format!(
            "This Tucker decomposition has core shape {:?} and represents a tensor of order {}.\n\
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

impl<T> fmt::Display for TuckerDecomp<T>
where
    T: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.describe().map_err(|_| fmt::Error)?;
        f.write_str(&summary)
    }
}
