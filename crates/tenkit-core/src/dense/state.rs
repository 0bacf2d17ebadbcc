//! Unfold bookkeeping for [`DenseND`](super::DenseND).
//!
//! A tensor is either folded (its normal N-way form) or unfolded along a
//! group of row modes. The state remembers what the tensor looked like right
//! before the most recent unfold so that `fold` can restore it without any
//! further input. Only one state is kept: unfolding an unfolded tensor
//! replaces it.

use crate::ops::column_modes;
use crate::types::{Mode, Shape};

/// How an unfolded tensor is laid out and what it folds back to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnfoldState {
    pub(crate) row_modes: Vec<Mode>,
    pub(crate) folded_shape: Shape,
    pub(crate) folded_names: Vec<String>,
    pub(crate) vectorized: bool,
}

impl UnfoldState {
    pub(crate) fn new(
        row_modes: &[Mode],
        folded_shape: &[usize],
        folded_names: Vec<String>,
        vectorized: bool,
    ) -> Self {
        Self {
            row_modes: row_modes.to_vec(),
            folded_shape: folded_shape.iter().copied().collect(),
            folded_names,
            vectorized,
        }
    }

    /// Modes enumerated by the rows of the unfolding, in row-major order.
    pub fn row_modes(&self) -> &[Mode] {
        &self.row_modes
    }

    /// Modes enumerated by the columns, in their original order.
    pub fn column_modes(&self) -> Vec<Mode> {
        column_modes(&self.row_modes, self.folded_shape.len())
    }

    /// The single mode of a mode-n unfolding, `None` for group unfoldings.
    pub fn mode(&self) -> Option<Mode> {
        match self.row_modes.as_slice() {
            [mode] if !self.vectorized => Some(*mode),
            _ => None,
        }
    }

    /// Shape restored by `fold`.
    pub fn folded_shape(&self) -> &[usize] {
        &self.folded_shape
    }

    /// Mode names restored by `fold`.
    pub fn folded_names(&self) -> &[String] {
        &self.folded_names
    }

    /// Whether the tensor was flattened to a vector rather than a matrix.
    pub fn is_vectorized(&self) -> bool {
        self.vectorized
    }
}
