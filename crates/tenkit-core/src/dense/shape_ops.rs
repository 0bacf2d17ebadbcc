//! Stateful unfold/fold (matricization/tensorization) on tensors
//!
//! Each operation comes in a pure form that returns a new tensor and an
//! `*_inplace` form that rewrites the receiver. In-place forms validate
//! everything before touching the receiver, so a failed call leaves it as it
//! was.

use super::state::UnfoldState;
use super::types::DenseND;
use crate::error::{TensorError, TensorResult};
use crate::ops::{column_modes, fold_view, unfold_view, validate_modes};
use crate::types::{default_mode_name, Mode};
use scirs2_core::ndarray_ext::{Array1, Array2};
use scirs2_core::numeric::Num;

/// Joined label for a group of modes, or the default label of `position`
/// when the group is empty.
fn group_name(names: &[String], modes: &[Mode], position: usize) -> String {
    if modes.is_empty() {
        return default_mode_name(position);
    }
    modes
        .iter()
        .map(|&m| names[m].as_str())
        .collect::<Vec<_>>()
        .join("_")
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Unfold (matricize) the tensor along a specific mode.
    ///
    /// The mode-n fibers become the columns of a `shape[mode] × size / shape[mode]`
    /// matrix. Columns enumerate the remaining modes lexicographically, in
    /// their original order, with the last one varying fastest.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidMode`] if `mode >= order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
    /// let tensor = DenseND::from_vec(data, &[2, 3, 4]).unwrap();
    ///
    /// let x2 = tensor.unfold(2).unwrap();
    /// assert_eq!(x2.shape(), &[4, 6]);
    /// assert_eq!(x2.to_vec()[..6], [0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
    ///
    /// // The receiver is untouched
    /// assert!(tensor.is_folded());
    /// ```
    pub fn unfold(&self, mode: Mode) -> TensorResult<Self> {
        self.unfold_group(&[mode])
    }

    /// In-place form of [`unfold`](Self::unfold).
    pub fn unfold_inplace(&mut self, mode: Mode) -> TensorResult<&mut Self> {
        self.unfold_group_inplace(&[mode])
    }

    /// Unfold with several modes enumerated by the rows.
    ///
    /// Rows enumerate `row_modes` in the given order (last fastest); columns
    /// enumerate the other modes in their original order. An empty group
    /// gives a single row.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidMode`] if a mode is out of range or
    /// listed twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let unfolded = tensor.unfold_group(&[2, 0]).unwrap();
    /// assert_eq!(unfolded.shape(), &[8, 3]);
    /// assert_eq!(unfolded.mode_names(), &["mode-2_mode-0", "mode-1"]);
    /// ```
    pub fn unfold_group(&self, row_modes: &[Mode]) -> TensorResult<Self> {
        let mut result = self.clone();
        result.unfold_group_inplace(row_modes)?;
        Ok(result)
    }

    /// In-place form of [`unfold_group`](Self::unfold_group).
    ///
    /// An already-unfolded tensor is unfolded from its current 2D form, and
    /// the new state replaces the previous one.
    pub fn unfold_group_inplace(&mut self, row_modes: &[Mode]) -> TensorResult<&mut Self> {
        let order = self.order();
        validate_modes(row_modes, order)?;

        let matrix: Array2<T> = unfold_view(&self.data.view(), row_modes)?;

        let cols = column_modes(row_modes, order);
        let names = vec![
            group_name(&self.mode_names, row_modes, 0),
            group_name(&self.mode_names, &cols, 1),
        ];

        tracing::debug!(
            modes = ?row_modes,
            from = ?self.shape(),
            to = ?matrix.shape(),
            "unfold"
        );

        let previous_names = std::mem::replace(&mut self.mode_names, names);
        self.state = Some(UnfoldState::new(
            row_modes,
            self.data.shape(),
            previous_names,
            false,
        ));
        self.data = matrix.into_dyn();
        Ok(self)
    }

    /// Flatten the tensor into a 1D tensor in row-major order.
    ///
    /// The flattening is recorded like an unfold, so [`fold`](Self::fold)
    /// restores the original shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let v = tensor.vectorize();
    /// assert_eq!(v.shape(), &[6]);
    /// assert_eq!(v.fold().unwrap(), tensor);
    /// ```
    pub fn vectorize(&self) -> Self {
        let mut result = self.clone();
        result.vectorize_inplace();
        result
    }

    /// In-place form of [`vectorize`](Self::vectorize).
    pub fn vectorize_inplace(&mut self) -> &mut Self {
        let all_modes: Vec<Mode> = (0..self.order()).collect();
        let name = group_name(&self.mode_names, &all_modes, 0);
        let flat: Array1<T> = self.data.iter().cloned().collect();

        tracing::debug!(from = ?self.shape(), size = flat.len(), "vectorize");

        let previous_names = std::mem::replace(&mut self.mode_names, vec![name]);
        self.state = Some(UnfoldState::new(
            &all_modes,
            self.data.shape(),
            previous_names,
            true,
        ));
        self.data = flat.into_dyn();
        self
    }

    /// Fold the tensor back to the shape recorded by the most recent unfold.
    ///
    /// Folding an already-folded tensor returns an unchanged copy. Use
    /// [`try_fold`](Self::try_fold) to treat that case as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] if the recorded state does not
    /// fit the data, which only happens for a hand-assembled state (for
    /// instance a deserialized one).
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let data: Vec<f64> = (0..24).map(|x| x as f64).collect();
    /// let tensor = DenseND::from_vec(data, &[2, 3, 4]).unwrap();
    ///
    /// let folded = tensor.unfold(1).unwrap().fold().unwrap();
    /// assert_eq!(folded, tensor);
    /// ```
    pub fn fold(&self) -> TensorResult<Self> {
        let mut result = self.clone();
        result.fold_inplace()?;
        Ok(result)
    }

    /// In-place form of [`fold`](Self::fold).
    pub fn fold_inplace(&mut self) -> TensorResult<&mut Self> {
        if self.state.is_none() {
            tracing::trace!(shape = ?self.shape(), "fold on a folded tensor");
            return Ok(self);
        }
        self.restore()?;
        Ok(self)
    }

    /// Strict form of [`fold`](Self::fold).
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::NotUnfolded`] if the tensor is already folded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::{DenseND, TensorError};
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3]);
    /// assert_eq!(tensor.try_fold(), Err(TensorError::NotUnfolded));
    /// ```
    pub fn try_fold(&self) -> TensorResult<Self> {
        if self.state.is_none() {
            return Err(TensorError::NotUnfolded);
        }
        self.fold()
    }

    /// In-place form of [`try_fold`](Self::try_fold).
    pub fn try_fold_inplace(&mut self) -> TensorResult<&mut Self> {
        if self.state.is_none() {
            return Err(TensorError::NotUnfolded);
        }
        self.fold_inplace()
    }

    /// Apply the recorded state, then clear it.
    fn restore(&mut self) -> TensorResult<()> {
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        if state.folded_names.len() != state.folded_shape.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Unfold state records {} names for {} modes",
                state.folded_names.len(),
                state.folded_shape.len()
            )));
        }

        let folded = fold_view(&self.data.view(), &state.folded_shape, &state.row_modes)?;

        tracing::debug!(
            modes = ?state.row_modes,
            from = ?self.shape(),
            to = ?folded.shape(),
            "fold"
        );

        if let Some(state) = self.state.take() {
            self.mode_names = state.folded_names;
        }
        self.data = folded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DenseND<f64> {
        DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap()
    }

    #[test]
    fn test_unfold_mode0_fixture() {
        let x0 = fixture().unfold(0).unwrap();
        assert_eq!(x0.shape(), &[2, 12]);
        let values = x0.to_vec();
        assert_eq!(values[..12], (0..12).map(|x| x as f64).collect::<Vec<_>>()[..]);
        assert_eq!(values[12..], (12..24).map(|x| x as f64).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_unfold_mode2_fixture() {
        let x2 = fixture().unfold(2).unwrap();
        assert_eq!(x2.shape(), &[4, 6]);
        assert_eq!(x2.to_vec()[..6], [0.0, 4.0, 8.0, 12.0, 16.0, 20.0]);
    }

    #[test]
    fn test_unfold_records_state() {
        let mut tensor = fixture();
        tensor.unfold_inplace(1).unwrap();

        let state = tensor.unfold_state().unwrap();
        assert_eq!(state.mode(), Some(1));
        assert_eq!(state.folded_shape(), &[2, 3, 4]);
        assert_eq!(tensor.mode_names(), &["mode-1", "mode-0_mode-2"]);
        assert_eq!(tensor.order(), 2);
        assert_eq!(tensor.folded_shape().as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_fold_inplace_round_trip() {
        let original = fixture()
            .with_mode_names(vec!["i", "j", "k"])
            .unwrap();
        for mode in 0..3 {
            let mut tensor = original.clone();
            tensor.unfold_inplace(mode).unwrap();
            tensor.fold_inplace().unwrap();
            assert_eq!(tensor, original);
        }
    }

    #[test]
    fn test_invalid_mode_leaves_tensor_untouched() {
        let mut tensor = fixture();
        let result = tensor.unfold_inplace(3);
        assert!(matches!(
            result,
            Err(TensorError::InvalidMode { mode: 3, order: 3, .. })
        ));
        assert_eq!(tensor, fixture());
    }

    #[test]
    fn test_fold_policies() {
        let tensor = fixture();
        assert_eq!(tensor.fold().unwrap(), tensor);
        assert_eq!(tensor.try_fold(), Err(TensorError::NotUnfolded));

        let mut unfolded = tensor.unfold(0).unwrap();
        assert!(unfolded.try_fold_inplace().is_ok());
        assert!(unfolded.is_folded());
        assert!(matches!(
            unfolded.try_fold_inplace(),
            Err(TensorError::NotUnfolded)
        ));
    }

    #[test]
    fn test_reunfold_replaces_state() {
        let mut tensor = fixture();
        tensor.unfold_inplace(0).unwrap(); // 2 x 12
        tensor.unfold_inplace(1).unwrap(); // 12 x 2

        assert_eq!(tensor.shape(), &[12, 2]);
        tensor.fold_inplace().unwrap();

        // Back to the 2 x 12 matrix, which is now the folded form
        assert_eq!(tensor.shape(), &[2, 12]);
        assert!(tensor.is_folded());
        assert_eq!(tensor.mode_names(), &["mode-0", "mode-1_mode-2"]);
    }

    #[test]
    fn test_empty_group_gives_single_row() {
        let unfolded = fixture().unfold_group(&[]).unwrap();
        assert_eq!(unfolded.shape(), &[1, 24]);
        assert_eq!(unfolded.fold().unwrap(), fixture());
    }

    #[test]
    fn test_vectorize_round_trip() {
        let mut tensor = fixture();
        tensor.vectorize_inplace();
        assert_eq!(tensor.shape(), &[24]);
        assert_eq!(tensor.mode_names(), &["mode-0_mode-1_mode-2"]);
        assert!(tensor.unfold_state().unwrap().is_vectorized());

        tensor.fold_inplace().unwrap();
        assert_eq!(tensor, fixture());
    }
}
