//! CP (Canonical Polyadic / CANDECOMP/PARAFAC) representation
//!
//! A CP representation expresses a tensor X as a weighted sum of R rank-1
//! tensors:
//!
//! X = Σᵣ λᵣ (a₁ᵣ ⊗ a₂ᵣ ⊗ ... ⊗ aₙᵣ)
//!
//! Where:
//! - R is the CP rank
//! - λᵣ are the component weights
//! - aₖᵣ is column r of the factor matrix Aₖ ∈ ℝ^(Iₖ×R)
//!
//! Equivalently X = Λ ×₁ A₁ ×₂ A₂ ... ×ₙ Aₙ, where the core Λ is the
//! R × ... × R tensor with the weights on its hyper-diagonal. Reconstruction
//! uses this form.

use crate::utils::{compression_ratio, labelled, rename_modes};
use scirs2_core::ndarray_ext::{Array1, Array2, ArrayView2};
use scirs2_core::numeric::{Float, Num};
use std::fmt;
use tenkit_core::tracing_support::record_reconstruction;
use tenkit_core::{default_mode_names, DenseND, Mode, TensorError};
use tenkit_kernels::{nmode_products_seq, outer_product_weighted, KernelError};
use thiserror::Error;

/// Errors from building or using a CP representation
#[derive(Error, Debug)]
pub enum CpError {
    /// No factors, or a factor's column count differs from the rank
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Component index not below the rank
    #[error("Invalid component {index}: rank is {rank}")]
    InvalidComponent { index: usize, rank: usize },

    /// Mode renaming or labelling failed
    #[error(transparent)]
    Tensor(#[from] TensorError),

    /// Outer-product or mode-product kernel failed
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

/// CP representation
///
/// Owns its factor matrices and weights. Every factor has exactly one column
/// per weight; this is checked once by [`CpDecomp::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CpDecomp<T> {
    factors: Vec<Array2<T>>,
    weights: Array1<T>,
    mode_names: Vec<String>,
}

impl<T> CpDecomp<T>
where
    T: Clone + Num,
{
    /// Create a CP representation from factor matrices and weights
    ///
    /// # Arguments
    ///
    /// * `factors` - One matrix per mode, shape (Iₖ, R)
    /// * `weights` - Component weights, length R
    ///
    /// # Errors
    ///
    /// Returns [`CpError::ShapeMismatch`] if there are no factors or a
    /// factor's column count differs from `weights.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{array, Array2};
    /// use tenkit_decomp::{CpDecomp, CpError};
    ///
    /// let weights = array![1.0, 2.0];
    /// let cp = CpDecomp::new(
    ///     vec![Array2::<f64>::ones((3, 2)), Array2::ones((4, 2))],
    ///     weights.clone(),
    /// ).unwrap();
    /// assert_eq!(cp.rank(), 2);
    ///
    /// let bad = CpDecomp::new(vec![Array2::<f64>::ones((3, 3))], weights);
    /// assert!(matches!(bad, Err(CpError::ShapeMismatch(_))));
    /// ```
    pub fn new(factors: Vec<Array2<T>>, weights: Array1<T>) -> Result<Self, CpError> {
        if factors.is_empty() {
            return Err(CpError::ShapeMismatch(
                "CP representation needs at least one factor matrix".to_string(),
            ));
        }

        let rank = weights.len();
        for (mode, factor) in factors.iter().enumerate() {
            if factor.ncols() != rank {
                return Err(CpError::ShapeMismatch(format!(
                    "Factor {} has {} columns, expected rank {}",
                    mode,
                    factor.ncols(),
                    rank
                )));
            }
        }

        tracing::trace!(order = factors.len(), rank = rank, "cp::new");

        let mode_names = default_mode_names(factors.len());
        Ok(Self {
            factors,
            weights,
            mode_names,
        })
    }

    /// Create a CP representation with every weight equal to one
    ///
    /// The rank is taken from the first factor.
    pub fn from_factors(factors: Vec<Array2<T>>) -> Result<Self, CpError> {
        let rank = factors.first().map_or(0, |f| f.ncols());
        Self::new(factors, Array1::ones(rank))
    }

    /// CP rank R (number of rank-1 components)
    pub fn rank(&self) -> usize {
        self.weights.len()
    }

    /// Number of modes of the represented tensor
    pub fn order(&self) -> usize {
        self.factors.len()
    }

    /// Shape of the represented tensor, one factor row count per mode
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    /// Number of elements of the represented tensor
    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Factor matrices in mode order
    pub fn factors(&self) -> &[Array2<T>] {
        &self.factors
    }

    /// Component weights
    pub fn weights(&self) -> &Array1<T> {
        &self.weights
    }

    /// Values stored by the representation: all factor entries plus the weights
    pub fn num_parameters(&self) -> usize {
        self.factors.iter().map(|f| f.len()).sum::<usize>() + self.weights.len()
    }

    /// Elements of the full tensor per stored parameter
    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(&self.shape(), self.num_parameters())
    }

    /// Mode names carried into [`reconstruct`](Self::reconstruct)
    pub fn mode_names(&self) -> &[String] {
        &self.mode_names
    }

    /// Rename selected modes; every index is validated first
    pub fn set_mode_names<I, S>(&mut self, names: I) -> Result<&mut Self, CpError>
    where
        I: IntoIterator<Item = (Mode, S)>,
        S: Into<String>,
    {
        rename_modes(&mut self.mode_names, names)?;
        Ok(self)
    }

    /// Restore the default `mode-k` labels
    pub fn reset_mode_names(&mut self) -> &mut Self {
        self.mode_names = default_mode_names(self.order());
        self
    }

    /// Dense R × ... × R core with the weights on the hyper-diagonal
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{array, Array2};
    /// use tenkit_decomp::CpDecomp;
    ///
    /// let cp = CpDecomp::new(
    ///     vec![Array2::<f64>::ones((2, 3)), Array2::ones((5, 3))],
    ///     array![4.0, 5.0, 6.0],
    /// ).unwrap();
    ///
    /// let core = cp.core();
    /// assert_eq!(core.shape(), &[3, 3]);
    /// assert_eq!(core[&[1, 1][..]], 5.0);
    /// assert_eq!(core[&[0, 1][..]], 0.0);
    /// ```
    pub fn core(&self) -> DenseND<T> {
        let order = self.order();
        let rank = self.rank();

        let mut core = DenseND::zeros(&vec![rank; order]);
        for (r, weight) in self.weights.iter().enumerate() {
            core[&vec![r; order][..]] = weight.clone();
        }
        core
    }

    /// The weighted rank-1 term `λᵣ (a₁ᵣ ⊗ ... ⊗ aₙᵣ)`
    ///
    /// # Errors
    ///
    /// Returns [`CpError::InvalidComponent`] if `r >= rank()`.
    pub fn component(&self, r: usize) -> Result<DenseND<T>, CpError> {
        if r >= self.rank() {
            return Err(CpError::InvalidComponent {
                index: r,
                rank: self.rank(),
            });
        }

        let columns: Vec<_> = self.factors.iter().map(|f| f.column(r)).collect();
        let term = outer_product_weighted(&columns, self.weights[r].clone())?;
        Ok(labelled(term, &self.mode_names)?)
    }

    /// Reconstruct the full tensor
    ///
    /// Computes Λ ×₁ A₁ ×₂ A₂ ... ×ₙ Aₙ, applying the factors in mode order.
    ///
    /// # Complexity
    ///
    /// Time: O(Σₖ I₁⋯Iₖ × Rᴺ⁻ᵏ⁺¹)
    /// Space: O(max(Rᴺ, ∏ᵢ Iᵢ))
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::array;
    /// use tenkit_decomp::CpDecomp;
    ///
    /// let a = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    /// let b = array![[2.0, 1.0], [0.0, 3.0]];
    /// let cp = CpDecomp::new(vec![a, b], array![1.0, 2.0]).unwrap();
    ///
    /// let full = cp.reconstruct().unwrap();
    /// assert_eq!(full.shape(), &[3, 2]);
    /// // 1·(1·2) + 2·(1·1)
    /// assert_eq!(full[&[2, 0][..]], 4.0);
    /// ```
    pub fn reconstruct(&self) -> Result<DenseND<T>, CpError> {
        let core = self.core();
        let views: Vec<ArrayView2<T>> = self.factors.iter().map(|f| f.view()).collect();
        let products: Vec<(&ArrayView2<T>, usize)> =
            views.iter().enumerate().map(|(mode, v)| (v, mode)).collect();

        let full = nmode_products_seq(&core.view(), &products)?;
        record_reconstruction("cp", full.shape(), self.num_parameters());

        Ok(labelled(full, &self.mode_names)?)
    }
}

impl<T> CpDecomp<T>
where
    T: Float,
{
    /// Frobenius norm of the represented tensor, computed from the reconstruction
    pub fn frob_norm(&self) -> Result<T, CpError> {
        Ok(self.reconstruct()?.frob_norm())
    }
}

impl<T> CpDecomp<T>
where
    T: Float + fmt::Display,
{
    /// Fixed-format summary of rank, shape, storage and norm
    pub fn describe(&self) -> Result<String, CpError> {
        Ok(format!(
            "This CP decomposition has rank {} and represents a tensor of order {}.\n\
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

impl<T> fmt::Display for CpDecomp<T>
where
    T: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.describe().map_err(|_| fmt::Error)?;
        f.write_str(&summary)
    }
}
