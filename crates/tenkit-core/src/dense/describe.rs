//! Human-readable summaries of a tensor

use super::types::DenseND;
use scirs2_core::numeric::Float;
use std::fmt;

impl<T> DenseND<T>
where
    T: Float + fmt::Display,
{
    /// Fixed-format summary of order, size, mode sizes and names, and norm.
    ///
    /// An unfolded tensor gets one more line naming the unfolded modes and the
    /// shape that folding restores.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 2]);
    /// assert_eq!(
    ///     tensor.describe(),
    ///     "This tensor is of order 2 and consists of 4 elements.\n\
    ///      Sizes and names of its modes are [2, 2] and [\"mode-0\", \"mode-1\"] respectively.\n\
    ///      Its Frobenius norm is 2.0000."
    /// );
    /// ```
    pub fn describe(&self) -> String {
        let mut summary = format!(
            "This tensor is of order {} and consists of {} elements.\n\
             Sizes and names of its modes are {:?} and {:?} respectively.\n\
             Its Frobenius norm is {:.4}.",
            self.order(),
            self.size(),
            self.shape(),
            self.mode_names(),
            self.frob_norm()
        );
        if let Some(state) = self.unfold_state() {
            let kind = if state.is_vectorized() {
                "vectorized"
            } else {
                "unfolded"
            };
            summary.push_str(&format!(
                "\nIt is {} along modes {:?}; folding restores shape {:?}.",
                kind,
                state.row_modes(),
                state.folded_shape()
            ));
        }
        summary
    }
}

impl<T> fmt::Display for DenseND<T>
where
    T: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
