//! Mode-n product of a tensor with a matrix

use super::types::DenseND;
use crate::error::TensorResult;
use crate::ops::{check_mode_product, mode_product};
use crate::types::Mode;
use scirs2_core::ndarray_ext::ArrayView2;
use scirs2_core::numeric::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Compute the mode-n product `self ×ₙ matrix`.
    ///
    /// Computes `Y₍ₙ₎ = matrix · X₍ₙ₎` and folds the result back with
    /// `shape[mode]` replaced by `matrix.nrows()`. An unfolded receiver is
    /// first restored to its folded shape, and the result is always folded.
    /// Mode names are kept.
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidMode`](crate::TensorError::InvalidMode) if
    ///   `mode` is not a mode of the folded tensor
    /// - [`TensorError::DimensionMismatch`](crate::TensorError::DimensionMismatch)
    ///   if `matrix.ncols()` differs from the size of that mode
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::array;
    /// use tenkit_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 3, 4]);
    /// let sum_rows = array![[1.0, 1.0, 1.0]];
    ///
    /// let y = tensor.mode_n_product(&sum_rows.view(), 1).unwrap();
    /// assert_eq!(y.shape(), &[2, 1, 4]);
    /// assert_eq!(y[&[1, 0, 3]], 3.0);
    /// ```
    pub fn mode_n_product(&self, matrix: &ArrayView2<T>, mode: Mode) -> TensorResult<Self> {
        let mut result = self.clone();
        result.mode_n_product_inplace(matrix, mode)?;
        Ok(result)
    }

    /// In-place form of [`mode_n_product`](Self::mode_n_product).
    ///
    /// The receiver is only replaced once the product has been computed, so
    /// an error leaves it (and its unfold state) unchanged.
    pub fn mode_n_product_inplace(
        &mut self,
        matrix: &ArrayView2<T>,
        mode: Mode,
    ) -> TensorResult<&mut Self> {
        check_mode_product(&self.folded_shape(), matrix, mode)?;

        let (product, names) = {
            let folded;
            let base = if self.is_folded() {
                &*self
            } else {
                folded = self.fold()?;
                &folded
            };
            (
                mode_product(&base.data.view(), matrix, mode)?,
                base.mode_names.clone(),
            )
        };

        tracing::debug!(
            mode,
            from = ?self.folded_shape().as_slice(),
            to = ?product.shape(),
            "mode_n_product"
        );

        self.data = product;
        self.mode_names = names;
        self.state = None;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TensorError;
    use scirs2_core::ndarray_ext::{array, Array2};

    fn fixture() -> DenseND<f64> {
        DenseND::from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap()
    }

    #[test]
    fn test_identity_product_is_noop() {
        let eye = Array2::<f64>::eye(3);
        let result = fixture().mode_n_product(&eye.view(), 1).unwrap();
        assert_eq!(result, fixture());
    }

    #[test]
    fn test_product_values() {
        let m = array![[1.0, 0.0], [1.0, 1.0]];
        let result = fixture().mode_n_product(&m.view(), 0).unwrap();
        assert_eq!(result.shape(), &[2, 3, 4]);
        // Row 1 is X[0] + X[1]
        assert_eq!(result[&[1, 0, 0]], 12.0);
        assert_eq!(result[&[1, 2, 3]], 11.0 + 23.0);
        assert_eq!(result[&[0, 2, 3]], 11.0);
    }

    #[test]
    fn test_unfolded_receiver_is_folded_first() {
        let m = array![[2.0, 0.0, 0.0, 0.0]];
        let mut tensor = fixture().with_mode_names(vec!["a", "b", "c"]).unwrap();
        tensor.unfold_inplace(1).unwrap();

        tensor.mode_n_product_inplace(&m.view(), 2).unwrap();
        assert!(tensor.is_folded());
        assert_eq!(tensor.shape(), &[2, 3, 1]);
        assert_eq!(tensor.mode_names(), &["a", "b", "c"]);
        assert_eq!(tensor[&[1, 2, 0]], 2.0 * 20.0);
    }

    #[test]
    fn test_errors_leave_receiver_untouched() {
        let m = array![[1.0, 0.0], [0.0, 1.0]];
        let mut tensor = fixture();
        tensor.unfold_inplace(0).unwrap();
        let before = tensor.clone();

        assert!(matches!(
            tensor.mode_n_product_inplace(&m.view(), 5),
            Err(TensorError::InvalidMode { mode: 5, order: 3, .. })
        ));
        assert!(matches!(
            tensor.mode_n_product_inplace(&m.view(), 2),
            Err(TensorError::DimensionMismatch { expected: 4, actual: 2, .. })
        ));
        assert_eq!(tensor, before);
    }
}
